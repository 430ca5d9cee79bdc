use crate::error::{OnionError, Result};

/// A closed Hamiltonian cycle.
///
/// Stored as `n + 1` cities: `path[0] == path[n] == 0` and `path[..n]` visits
/// every city exactly once. Fixing the start at city `0` keeps equal cycles
/// equal as values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    path: Vec<usize>,
}

impl Tour {
    /// Builds a tour from a visiting order over cities `0..order.len()`.
    ///
    /// The order may start anywhere; the cycle is rotated to start at `0`
    /// and closed.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidSolution`] if `order` is empty or is not
    /// a permutation of `0..order.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use onion::tsp::Tour;
    ///
    /// let tour = Tour::from_order(vec![2, 0, 3, 1])?;
    /// assert_eq!(tour.path(), &[0, 3, 1, 2, 0]);
    /// # Ok::<(), onion::error::OnionError>(())
    /// ```
    pub fn from_order(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        check_permutation(&order, n)?;
        let start = order.iter().position(|&city| city == 0).unwrap_or(0);

        let mut path = Vec::with_capacity(n + 1);
        path.extend_from_slice(&order[start..]);
        path.extend_from_slice(&order[..start]);
        path.push(0);
        Ok(Self { path })
    }

    /// Wraps a closed path, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidSolution`] if the path is not a closed
    /// cycle starting at `0` that visits each city once.
    pub fn from_path(path: Vec<usize>) -> Result<Self> {
        let tour = Self { path };
        tour.validate()?;
        Ok(tour)
    }

    pub(crate) fn closed_unchecked(path: Vec<usize>) -> Self {
        debug_assert!(Self::from_path(path.clone()).is_ok());
        Self { path }
    }

    /// Checks the closed-cycle invariants.
    pub fn validate(&self) -> Result<()> {
        if self.path.len() < 2 {
            return Err(OnionError::InvalidSolution(format!(
                "A tour needs at least 2 entries, got {}",
                self.path.len()
            )));
        }
        let n = self.num_cities();
        if self.path[0] != 0 || self.path[n] != 0 {
            return Err(OnionError::InvalidSolution(
                "A tour must start and end at city 0".to_string(),
            ));
        }
        check_permutation(&self.path[..n], n)
    }

    /// The closed path, `num_cities() + 1` entries long.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn num_cities(&self) -> usize {
        self.path.len() - 1
    }

    /// Consecutive `(from, to)` pairs of the cycle, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Reverses `path[i..=j]`.
    pub(crate) fn reverse(&mut self, i: usize, j: usize) {
        self.path[i..=j].reverse();
    }
}

fn check_permutation(cities: &[usize], n: usize) -> Result<()> {
    if n == 0 {
        return Err(OnionError::InvalidSolution(
            "A tour must visit at least one city".to_string(),
        ));
    }
    let mut seen = vec![false; n];
    for &city in cities {
        if city >= n {
            return Err(OnionError::InvalidSolution(format!(
                "City {} is out of range for {} cities",
                city, n
            )));
        }
        if seen[city] {
            return Err(OnionError::InvalidSolution(format!(
                "City {} is visited more than once",
                city
            )));
        }
        seen[city] = true;
    }
    Ok(())
}
