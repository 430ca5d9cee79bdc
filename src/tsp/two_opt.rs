use std::sync::Arc;

use crate::component::{ComponentId, Identified};
use crate::error::{OnionError, Result};
use crate::operators::{DeltaObjective, ParameterOperator, PerturbationOperator};
use crate::rng::RandomEngine;

use super::{Tour, TspInstance};

/// A 2-opt transformation: reverse `path[i..=j]`.
///
/// Valid moves satisfy `1 <= i < j <= n - 1`, which keeps city `0` at both
/// ends of the path.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoOptMove {
    pub i: usize,
    pub j: usize,
}

impl TwoOptMove {
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidSolution`] if the move does not fit a tour
    /// of `num_cities` cities.
    pub fn new(i: usize, j: usize, num_cities: usize) -> Result<Self> {
        if i == 0 || i >= j || j + 1 > num_cities {
            return Err(OnionError::InvalidSolution(format!(
                "2-opt move ({}, {}) is invalid for {} cities",
                i, j, num_cities
            )));
        }
        Ok(Self { i, j })
    }

    /// Returns a copy of `tour` with the move applied.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidSolution`] if the move does not fit the tour.
    pub fn apply(&self, tour: &Tour) -> Result<Tour> {
        Self::new(self.i, self.j, tour.num_cities())?;
        let mut neighbour = tour.clone();
        neighbour.reverse(self.i, self.j);
        Ok(neighbour)
    }
}

/// Draws `count` uniformly random 2-opt moves.
#[derive(Debug, Clone)]
pub struct RandomTwoOpt {
    num_cities: usize,
    count: usize,
    id: ComponentId,
}

impl RandomTwoOpt {
    /// # Errors
    ///
    /// Returns [`OnionError::Configuration`] if there are fewer than 3 cities
    /// (no 2-opt move exists) or `count` is 0.
    pub fn new(num_cities: usize, count: usize) -> Result<Self> {
        if num_cities < 3 {
            return Err(OnionError::Configuration(format!(
                "2-opt needs at least 3 cities, got {}",
                num_cities
            )));
        }
        if count == 0 {
            return Err(OnionError::Configuration(
                "Number of 2-opt moves must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            num_cities,
            count,
            id: ComponentId::builder()
                .name("RandomTwoOpt")
                .kind("Parameter Operator")
                .description("Draws random segment reversals of a hamiltonian cycle.")
                .problem("TSP")
                .solution_type("Tour")
                .build(),
        })
    }

    fn draw(&self, rng: &mut dyn RandomEngine) -> TwoOptMove {
        // two distinct positions in [1, n - 1], uniform over unordered pairs
        let last = (self.num_cities - 1) as u32;
        let a = rng.uniform_int_between(1, last);
        let mut b = rng.uniform_int_between(1, last - 1);
        if b >= a {
            b += 1;
        }
        TwoOptMove {
            i: a.min(b) as usize,
            j: a.max(b) as usize,
        }
    }
}

impl Identified for RandomTwoOpt {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl ParameterOperator<Tour> for RandomTwoOpt {
    type Parameter = TwoOptMove;

    fn parameters(&mut self, rng: &mut dyn RandomEngine) -> Result<Vec<TwoOptMove>> {
        Ok((0..self.count).map(|_| self.draw(rng)).collect())
    }
}

/// O(1) change in tour length caused by a 2-opt move.
///
/// Only defined for symmetric instances: on asymmetric ones reversing a
/// segment also changes the cost of every edge inside it.
#[derive(Debug, Clone)]
pub struct TwoOptDelta {
    instance: Arc<TspInstance>,
    id: ComponentId,
}

impl TwoOptDelta {
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidInstance`] if the instance is asymmetric.
    pub fn new(instance: Arc<TspInstance>) -> Result<Self> {
        if !instance.is_symmetric() {
            return Err(OnionError::InvalidInstance(
                "2-opt delta evaluation requires a symmetric instance".to_string(),
            ));
        }
        Ok(Self {
            instance,
            id: ComponentId::builder()
                .name("TwoOptDelta")
                .kind("Delta Objective")
                .description("Change in tour length caused by a segment reversal.")
                .problem("TSP")
                .solution_type("Tour")
                .build(),
        })
    }
}

impl Identified for TwoOptDelta {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl DeltaObjective<Tour, TwoOptMove> for TwoOptDelta {
    type Delta = i64;

    /// # Panics
    ///
    /// Panics if `mv` does not fit `tour` (see [`TwoOptMove::new`]).
    fn delta(&self, tour: &Tour, mv: &TwoOptMove) -> i64 {
        assert!(
            mv.i >= 1 && mv.i < mv.j && mv.j < tour.num_cities(),
            "2-opt move ({}, {}) does not fit a tour of {} cities",
            mv.i,
            mv.j,
            tour.num_cities()
        );
        let path = tour.path();
        let (a, b) = (path[mv.i - 1], path[mv.i]);
        let (c, d) = (path[mv.j], path[mv.j + 1]);
        let cost = |x: usize, y: usize| i64::from(self.instance.cost(x, y));
        cost(a, c) + cost(b, d) - cost(a, b) - cost(c, d)
    }
}

/// Builds complete neighbours by applying random 2-opt moves.
#[derive(Debug, Clone)]
pub struct TwoOptPerturbation {
    moves: RandomTwoOpt,
    id: ComponentId,
}

impl TwoOptPerturbation {
    /// Creates an operator producing `samples` neighbours per call.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RandomTwoOpt::new`].
    pub fn new(num_cities: usize, samples: usize) -> Result<Self> {
        Ok(Self {
            moves: RandomTwoOpt::new(num_cities, samples)?,
            id: ComponentId::builder()
                .name("TwoOptPerturbation")
                .kind("Perturbation Operator")
                .description("Reverses random segments of a hamiltonian cycle.")
                .problem("TSP")
                .solution_type("Tour")
                .build(),
        })
    }
}

impl Identified for TwoOptPerturbation {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl PerturbationOperator<Tour> for TwoOptPerturbation {
    fn perturb(&mut self, tour: &Tour, rng: &mut dyn RandomEngine) -> Result<Vec<Tour>> {
        if tour.num_cities() != self.moves.num_cities {
            return Err(OnionError::InvalidSolution(format!(
                "Tour has {} cities, operator expects {}",
                tour.num_cities(),
                self.moves.num_cities
            )));
        }
        self.moves
            .parameters(rng)?
            .iter()
            .map(|mv| mv.apply(tour))
            .collect()
    }

    fn problem_size(&self) -> Option<usize> {
        Some(self.moves.num_cities)
    }
}
