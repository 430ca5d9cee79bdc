use std::fmt::Debug;

use crate::{
    error::{OnionError, Result},
    operators::{CreateOperator, ObjectiveFunction, PerturbationOperator, SelectOperator},
};

use super::{LocalSearch, LocalSearchOptions};

/// Assembles a [`LocalSearch`] from its components.
///
/// Every operator is required; options default to
/// [`LocalSearchOptions::default`].
pub struct LocalSearchBuilder<S, V> {
    create: Option<Box<dyn CreateOperator<S>>>,
    perturbation: Option<Box<dyn PerturbationOperator<S>>>,
    objective: Option<Box<dyn ObjectiveFunction<S, Value = V>>>,
    select: Option<Box<dyn SelectOperator<V>>>,
    options: LocalSearchOptions,
}

impl<S, V> LocalSearchBuilder<S, V>
where
    S: Send + Sync,
    V: PartialOrd + Copy + Debug + Send,
{
    pub fn new() -> Self {
        Self {
            create: None,
            perturbation: None,
            objective: None,
            select: None,
            options: LocalSearchOptions::default(),
        }
    }

    pub fn with_create_operator(mut self, create: impl CreateOperator<S> + 'static) -> Self {
        self.create = Some(Box::new(create));
        self
    }

    pub fn with_perturbation_operator(
        mut self,
        perturbation: impl PerturbationOperator<S> + 'static,
    ) -> Self {
        self.perturbation = Some(Box::new(perturbation));
        self
    }

    pub fn with_objective_function(
        mut self,
        objective: impl ObjectiveFunction<S, Value = V> + 'static,
    ) -> Self {
        self.objective = Some(Box::new(objective));
        self
    }

    pub fn with_select_operator(mut self, select: impl SelectOperator<V> + 'static) -> Self {
        self.select = Some(Box::new(select));
        self
    }

    pub fn with_options(mut self, options: LocalSearchOptions) -> Self {
        self.options = options;
        self
    }

    /// # Errors
    ///
    /// Returns [`OnionError::Configuration`] if an operator is missing, the
    /// operators are bound to problems of different sizes, or the options are
    /// invalid.
    pub fn build(self) -> Result<LocalSearch<S, V>> {
        let create = self
            .create
            .ok_or_else(|| OnionError::Configuration("Create operator not specified".to_string()))?;

        let perturbation = self.perturbation.ok_or_else(|| {
            OnionError::Configuration("Perturbation operator not specified".to_string())
        })?;

        let objective = self.objective.ok_or_else(|| {
            OnionError::Configuration("Objective function not specified".to_string())
        })?;

        let select = self
            .select
            .ok_or_else(|| OnionError::Configuration("Select operator not specified".to_string()))?;

        check_problem_sizes(&[
            ("Create operator", create.problem_size()),
            ("Perturbation operator", perturbation.problem_size()),
            ("Objective function", objective.problem_size()),
        ])?;

        self.options.validate()?;

        Ok(LocalSearch::new(
            create,
            perturbation,
            objective,
            select,
            self.options,
        ))
    }
}

/// Fails if two components report different problem sizes.
fn check_problem_sizes(sizes: &[(&str, Option<usize>)]) -> Result<()> {
    let mut known: Option<(&str, usize)> = None;
    for &(component, size) in sizes {
        let Some(size) = size else { continue };
        match known {
            Some((first, expected)) if expected != size => {
                return Err(OnionError::Configuration(format!(
                    "{} expects a problem of size {}, but {} expects size {}",
                    component, size, first, expected
                )));
            }
            Some(_) => {}
            None => known = Some((component, size)),
        }
    }
    Ok(())
}

impl<S, V> Default for LocalSearchBuilder<S, V>
where
    S: Send + Sync,
    V: PartialOrd + Copy + Debug + Send,
{
    fn default() -> Self {
        Self::new()
    }
}
