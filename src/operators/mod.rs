//! # Operators
//!
//! The building blocks of every algorithm in the framework. Each operator
//! has exactly one responsibility:
//!
//! - [`CreateOperator`]: builds a complete, valid solution from scratch.
//! - [`PerturbationOperator`]: builds a (possibly unitary) set of complete,
//!   valid neighbours of a solution by applying one fixed transformation with
//!   different parameters.
//! - [`ParameterOperator`]: produces transformation parameters instead of
//!   solutions, for neighbourhoods too large or too expensive to build.
//! - [`ObjectiveFunction`]: assigns a value to a solution.
//! - [`DeltaObjective`]: computes how much a transformation parameter would
//!   change the value of a solution, without building the neighbour.
//! - [`SelectOperator`]: picks a candidate given the best value found so far.
//!
//! Operators that need randomness receive the engine as `&mut dyn RandomEngine`,
//! so an owned engine, a registry's engine, or [`random()`](crate::rng::random)
//! can be supplied.

use std::fmt::Debug;

use crate::component::Identified;
use crate::error::Result;
use crate::rng::RandomEngine;

pub mod compare;
pub mod select;

pub use compare::Comparison;
pub use select::{SelectBest, SelectFirst};

/// Creates solutions to a problem.
///
/// Created solutions must be complete (every part set) and valid (any
/// validation already performed).
pub trait CreateOperator<S>: Identified + Debug {
    fn create(&mut self, rng: &mut dyn RandomEngine) -> Result<S>;

    /// Size of the problem instance the operator is bound to, if any.
    ///
    /// [`LocalSearchBuilder`](crate::local_search::LocalSearchBuilder) rejects
    /// operators that report different sizes.
    fn problem_size(&self) -> Option<usize> {
        None
    }
}

/// Creates candidate solutions by transforming a known solution.
///
/// An operator implements a single transformation; different neighbours only
/// differ in the parameters passed to it. Algorithms that use several
/// neighbourhoods combine several operators.
pub trait PerturbationOperator<S>: Identified + Debug {
    /// Returns a non-empty set of complete, valid neighbours of `solution`.
    fn perturb(&mut self, solution: &S, rng: &mut dyn RandomEngine) -> Result<Vec<S>>;

    /// See [`CreateOperator::problem_size`].
    fn problem_size(&self) -> Option<usize> {
        None
    }
}

/// Creates transformation parameters for solutions of type `S`.
///
/// Parameters depend on the problem, not on a particular solution. Applying a
/// valid parameter to a valid solution yields a valid solution.
pub trait ParameterOperator<S>: Identified + Debug {
    type Parameter;

    fn parameters(&mut self, rng: &mut dyn RandomEngine) -> Result<Vec<Self::Parameter>>;
}

/// Assigns a value to a solution.
///
/// Evaluation takes `&self` so candidate sets can be evaluated in parallel.
pub trait ObjectiveFunction<S>: Identified + Debug + Send + Sync {
    type Value: PartialOrd + Copy + Debug + Send;

    fn evaluate(&self, solution: &S) -> Self::Value;

    /// Checks that `solution` can be evaluated by this function.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidSolution`](crate::error::OnionError::InvalidSolution)
    /// for a solution `evaluate` cannot handle.
    fn check(&self, _solution: &S) -> Result<()> {
        Ok(())
    }

    /// See [`CreateOperator::problem_size`].
    fn problem_size(&self) -> Option<usize> {
        None
    }
}

/// Computes the change in value caused by applying a transformation
/// parameter to a solution.
///
/// `value(apply(s, p)) == value(s) + delta(s, p)`.
pub trait DeltaObjective<S, P>: Identified + Debug {
    type Delta: Copy + Debug;

    fn delta(&self, solution: &S, parameter: &P) -> Self::Delta;
}

/// Chooses one candidate out of a set of evaluated candidates.
pub trait SelectOperator<V>: Identified + Debug {
    /// Returns the index of the selected candidate, or `None` when no
    /// candidate is acceptable relative to `best_so_far`.
    fn select(&mut self, best_so_far: &V, candidates: &[V]) -> Option<usize>;
}
