use crate::component::{ComponentId, Identified};

use super::{Comparison, SelectOperator};

/// Selects the best candidate that satisfies the comparison against the best
/// value so far (best improvement).
///
/// "Best" follows the direction of the comparison: the smallest value for
/// `Less`/`LessOrEqual`, the largest for `Greater`/`GreaterOrEqual`. For
/// `Equal` and `Always` the first acceptable candidate wins. Ties keep the
/// earliest candidate.
///
/// # Examples
///
/// ```rust
/// use onion::operators::{Comparison, SelectBest, SelectOperator};
///
/// let mut select = SelectBest::new(Comparison::Less);
/// assert_eq!(select.select(&10, &[12, 7, 9, 3, 11]), Some(3));
/// assert_eq!(select.select(&2, &[12, 7, 9, 3, 11]), None);
/// ```
#[derive(Debug, Clone)]
pub struct SelectBest {
    comparison: Comparison,
    id: ComponentId,
}

impl SelectBest {
    pub fn new(comparison: Comparison) -> Self {
        Self {
            comparison,
            id: ComponentId::builder()
                .name("SelectBest")
                .kind("Select Operator")
                .description("Selects the best candidate that satisfies the comparison.")
                .build(),
        }
    }

    /// Best improvement for minimization problems.
    pub fn minimizing() -> Self {
        Self::new(Comparison::Less)
    }

    /// Best improvement for maximization problems.
    pub fn maximizing() -> Self {
        Self::new(Comparison::Greater)
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }
}

impl Identified for SelectBest {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl<V: PartialOrd> SelectOperator<V> for SelectBest {
    fn select(&mut self, best_so_far: &V, candidates: &[V]) -> Option<usize> {
        let mut selected: Option<usize> = None;
        for (index, value) in candidates.iter().enumerate() {
            if !self.comparison.holds(value, best_so_far) {
                continue;
            }
            match selected {
                Some(current) if !self.comparison.prefers(value, &candidates[current]) => {}
                _ => selected = Some(index),
            }
        }
        selected
    }
}

/// Selects the first candidate that satisfies the comparison against the best
/// value so far (first improvement).
#[derive(Debug, Clone)]
pub struct SelectFirst {
    comparison: Comparison,
    id: ComponentId,
}

impl SelectFirst {
    pub fn new(comparison: Comparison) -> Self {
        Self {
            comparison,
            id: ComponentId::builder()
                .name("SelectFirst")
                .kind("Select Operator")
                .description("Selects the first candidate that satisfies the comparison.")
                .build(),
        }
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }
}

impl Identified for SelectFirst {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl<V: PartialOrd> SelectOperator<V> for SelectFirst {
    fn select(&mut self, best_so_far: &V, candidates: &[V]) -> Option<usize> {
        candidates
            .iter()
            .position(|value| self.comparison.holds(value, best_so_far))
    }
}
