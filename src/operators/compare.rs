/// Relation a candidate value must satisfy against a reference value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    /// Accepts anything.
    Always,
}

impl Comparison {
    /// Returns whether `candidate <relation> reference` holds.
    ///
    /// ```rust
    /// use onion::operators::Comparison;
    ///
    /// assert!(Comparison::Less.holds(&1, &2));
    /// assert!(!Comparison::Greater.holds(&1, &2));
    /// assert!(Comparison::Always.holds(&f64::NAN, &0.0));
    /// ```
    pub fn holds<T: PartialOrd>(self, candidate: &T, reference: &T) -> bool {
        match self {
            Comparison::Less => candidate < reference,
            Comparison::LessOrEqual => candidate <= reference,
            Comparison::Greater => candidate > reference,
            Comparison::GreaterOrEqual => candidate >= reference,
            Comparison::Equal => candidate == reference,
            Comparison::Always => true,
        }
    }

    /// Returns whether `a` ranks ahead of `b` under this relation.
    ///
    /// Minimizing relations prefer smaller values, maximizing ones larger.
    /// `Equal` and `Always` rank nothing ahead.
    pub fn prefers<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Comparison::Less | Comparison::LessOrEqual => a < b,
            Comparison::Greater | Comparison::GreaterOrEqual => a > b,
            Comparison::Equal | Comparison::Always => false,
        }
    }
}
