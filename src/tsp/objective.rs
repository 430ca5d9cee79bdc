use std::sync::Arc;

use crate::component::{ComponentId, Identified};
use crate::error::{OnionError, Result};
use crate::operators::ObjectiveFunction;

use super::{Tour, TspInstance};

/// Total cost of a tour, closing edge included.
///
/// # Panics
///
/// `evaluate` panics on a tour with more cities than the instance; use
/// `check` first for tours of unknown origin.
#[derive(Debug, Clone)]
pub struct TourLength {
    instance: Arc<TspInstance>,
    id: ComponentId,
}

impl TourLength {
    pub fn new(instance: Arc<TspInstance>) -> Self {
        Self {
            instance,
            id: ComponentId::builder()
                .name("TourLength")
                .kind("Objective Function")
                .description("Sums the travel costs along a hamiltonian cycle.")
                .problem("TSP")
                .solution_type("Tour")
                .build(),
        }
    }
}

impl Identified for TourLength {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl ObjectiveFunction<Tour> for TourLength {
    type Value = u64;

    fn evaluate(&self, tour: &Tour) -> u64 {
        tour.edges()
            .map(|(from, to)| u64::from(self.instance.cost(from, to)))
            .sum()
    }

    fn check(&self, tour: &Tour) -> Result<()> {
        if tour.num_cities() != self.instance.num_cities() {
            return Err(OnionError::InvalidSolution(format!(
                "Tour has {} cities, instance has {}",
                tour.num_cities(),
                self.instance.num_cities()
            )));
        }
        Ok(())
    }

    fn problem_size(&self) -> Option<usize> {
        Some(self.instance.num_cities())
    }
}
