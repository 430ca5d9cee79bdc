//! # Local Search
//!
//! A local search assembled from the four fundamental components: a
//! [`CreateOperator`] for the starting point, a [`PerturbationOperator`]
//! for the neighbourhood, an [`ObjectiveFunction`] to value candidates and
//! a [`SelectOperator`] deciding which candidate, if any, replaces the
//! current solution.
//!
//! Each iteration perturbs the current solution, evaluates the candidates
//! (in parallel once there are at least `parallel_threshold` of them) and
//! asks the select operator for a candidate. The search stops after
//! `max_iterations` iterations or `max_non_improving` consecutive iterations
//! without an accepted candidate.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use onion::local_search::{LocalSearchBuilder, LocalSearchOptions, LogLevel};
//! use onion::operators::SelectBest;
//! use onion::rng::StdEngine;
//! use onion::tsp::{CreateRandom, TourLength, TspInstance, TwoOptPerturbation};
//!
//! let points: Vec<(f64, f64)> = (0..8)
//!     .map(|k| {
//!         let angle = k as f64 * std::f64::consts::PI / 4.0;
//!         (100.0 * angle.cos(), 100.0 * angle.sin())
//!     })
//!     .collect();
//! let instance = Arc::new(TspInstance::from_coordinates(&points)?);
//!
//! let mut search = LocalSearchBuilder::new()
//!     .with_create_operator(CreateRandom::new(8)?)
//!     .with_perturbation_operator(TwoOptPerturbation::new(8, 20)?)
//!     .with_objective_function(TourLength::new(Arc::clone(&instance)))
//!     .with_select_operator(SelectBest::minimizing())
//!     .with_options(LocalSearchOptions::new(500, 50, LogLevel::None))
//!     .build()?;
//!
//! let result = search.run(&mut StdEngine::from_seed(42))?;
//! assert!(result.iterations <= 500);
//! # Ok::<(), onion::error::OnionError>(())
//! ```

mod builder;
mod options;

pub use builder::LocalSearchBuilder;
pub use options::{LocalSearchOptions, LogLevel};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{OnionError, OptionExt, Result};
use crate::operators::{CreateOperator, ObjectiveFunction, PerturbationOperator, SelectOperator};
use crate::rng::RandomEngine;

/// Outcome of a local search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<S, V> {
    /// The solution held when the search stopped.
    pub solution: S,
    /// Its objective value.
    pub value: V,
    /// Iterations performed.
    pub iterations: usize,
    /// Iterations in which a candidate was accepted.
    pub improvements: usize,
}

/// A configured local search.
///
/// Build one with [`LocalSearchBuilder`].
#[derive(Debug)]
pub struct LocalSearch<S, V> {
    create: Box<dyn CreateOperator<S>>,
    perturbation: Box<dyn PerturbationOperator<S>>,
    objective: Box<dyn ObjectiveFunction<S, Value = V>>,
    select: Box<dyn SelectOperator<V>>,
    options: LocalSearchOptions,
}

impl<S, V> LocalSearch<S, V>
where
    S: Send + Sync,
    V: PartialOrd + Copy + std::fmt::Debug + Send,
{
    pub(crate) fn new(
        create: Box<dyn CreateOperator<S>>,
        perturbation: Box<dyn PerturbationOperator<S>>,
        objective: Box<dyn ObjectiveFunction<S, Value = V>>,
        select: Box<dyn SelectOperator<V>>,
        options: LocalSearchOptions,
    ) -> Self {
        Self {
            create,
            perturbation,
            objective,
            select,
            options,
        }
    }

    pub fn options(&self) -> &LocalSearchOptions {
        &self.options
    }

    /// Creates a starting solution and searches from it.
    ///
    /// # Errors
    ///
    /// Fails on invalid options, on any operator error, with
    /// [`OnionError::InvalidSolution`] if the objective function cannot
    /// evaluate the starting solution, and with
    /// [`OnionError::EmptyCandidates`] if the perturbation operator returns
    /// no candidates.
    pub fn run(&mut self, rng: &mut dyn RandomEngine) -> Result<SearchResult<S, V>> {
        self.options.validate()?;
        let initial = self.create.create(rng)?;
        self.run_from(initial, rng)
    }

    /// Searches from `initial`.
    ///
    /// # Errors
    ///
    /// Same as [`LocalSearch::run`].
    pub fn run_from(
        &mut self,
        initial: S,
        rng: &mut dyn RandomEngine,
    ) -> Result<SearchResult<S, V>> {
        self.options.validate()?;
        self.objective.check(&initial)?;

        let log_level = self.options.get_log_level();
        let mut current = initial;
        let mut value = self.objective.evaluate(&current);
        let mut iterations = 0;
        let mut improvements = 0;
        let mut non_improving = 0;

        while iterations < self.options.get_max_iterations()
            && non_improving < self.options.get_max_non_improving()
        {
            iterations += 1;

            let candidates = self.perturbation.perturb(&current, rng)?;
            if candidates.is_empty() {
                return Err(OnionError::EmptyCandidates);
            }
            let values = evaluate_all(
                self.objective.as_ref(),
                &candidates,
                self.options.get_parallel_threshold(),
            );

            let accepted = match self.select.select(&value, &values) {
                Some(index) => {
                    let candidate_value = values.get(index).copied().ok_or_else_onion(|| {
                        OnionError::Other(format!(
                            "Select operator returned index {} for {} candidates",
                            index,
                            values.len()
                        ))
                    })?;
                    current = candidates.into_iter().nth(index).ok_or_else_onion(|| {
                        OnionError::Other("Selected candidate disappeared".to_string())
                    })?;
                    value = candidate_value;
                    improvements += 1;
                    non_improving = 0;
                    true
                }
                None => {
                    non_improving += 1;
                    false
                }
            };

            if log_level == LogLevel::Verbose {
                debug!(iteration = iterations, value = ?value, accepted, "local search iteration");
            }
        }

        if log_level != LogLevel::None {
            info!(
                iterations,
                improvements,
                value = ?value,
                "local search finished"
            );
        }

        Ok(SearchResult {
            solution: current,
            value,
            iterations,
            improvements,
        })
    }
}

/// Evaluates every candidate, in parallel once there are enough of them.
fn evaluate_all<S, V>(
    objective: &dyn ObjectiveFunction<S, Value = V>,
    candidates: &[S],
    parallel_threshold: usize,
) -> Vec<V>
where
    S: Sync,
    V: PartialOrd + Copy + std::fmt::Debug + Send,
{
    if candidates.len() >= parallel_threshold {
        candidates
            .par_iter()
            .map(|candidate| objective.evaluate(candidate))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| objective.evaluate(candidate))
            .collect()
    }
}
