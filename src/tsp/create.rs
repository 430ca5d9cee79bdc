use std::sync::Arc;

use crate::component::{ComponentId, Identified};
use crate::error::{OnionError, Result};
use crate::operators::CreateOperator;
use crate::rng::RandomEngine;

use super::{Tour, TspInstance};

/// Creates uniformly random Hamiltonian cycles.
#[derive(Debug, Clone)]
pub struct CreateRandom {
    num_cities: usize,
    id: ComponentId,
}

impl CreateRandom {
    /// # Errors
    ///
    /// Returns [`OnionError::Configuration`] if `num_cities` is 0.
    pub fn new(num_cities: usize) -> Result<Self> {
        if num_cities == 0 {
            return Err(OnionError::Configuration(
                "Number of cities must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            num_cities,
            id: ComponentId::builder()
                .name("CreateRandom")
                .kind("Create Operator")
                .description("Creates a random hamiltonian cycle.")
                .problem("TSP")
                .solution_type("Tour")
                .build(),
        })
    }
}

impl Identified for CreateRandom {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl CreateOperator<Tour> for CreateRandom {
    fn create(&mut self, rng: &mut dyn RandomEngine) -> Result<Tour> {
        let mut path = Vec::with_capacity(self.num_cities + 1);
        path.extend(0..self.num_cities);

        // Fisher-Yates over path[1..], city 0 stays in front
        for i in (2..self.num_cities).rev() {
            let j = 1 + rng.uniform_index(i);
            path.swap(i, j);
        }
        path.push(0);
        Ok(Tour::closed_unchecked(path))
    }

    fn problem_size(&self) -> Option<usize> {
        Some(self.num_cities)
    }
}

/// Starts at a random city, then repeatedly moves to the cheapest unvisited
/// city until every city is visited.
///
/// Ties go to the lowest city index.
#[derive(Debug, Clone)]
pub struct CreateGreedy {
    instance: Arc<TspInstance>,
    id: ComponentId,
}

impl CreateGreedy {
    pub fn new(instance: Arc<TspInstance>) -> Self {
        Self {
            instance,
            id: ComponentId::builder()
                .name("CreateGreedy")
                .kind("Create Operator")
                .description(
                    "Starts at a random city then move to the closest city recursively until all cities are visited.",
                )
                .problem("TSP")
                .solution_type("Tour")
                .build(),
        }
    }

    /// Builds the greedy cycle from a fixed starting city.
    pub fn from_start(&self, start: usize) -> Result<Tour> {
        let n = self.instance.num_cities();
        if start >= n {
            return Err(OnionError::Configuration(format!(
                "Start city {} is out of range for {} cities",
                start, n
            )));
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut city = start;
        visited[city] = true;
        order.push(city);

        while order.len() < n {
            let next = (0..n)
                .filter(|&candidate| !visited[candidate])
                .min_by_key(|&candidate| (self.instance.cost(city, candidate), candidate))
                .ok_or_else(|| OnionError::Other("No unvisited city left".to_string()))?;
            visited[next] = true;
            order.push(next);
            city = next;
        }

        Tour::from_order(order)
    }
}

impl Identified for CreateGreedy {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl CreateOperator<Tour> for CreateGreedy {
    fn create(&mut self, rng: &mut dyn RandomEngine) -> Result<Tour> {
        let start = rng.uniform_index(self.instance.num_cities());
        self.from_start(start)
    }

    fn problem_size(&self) -> Option<usize> {
        Some(self.instance.num_cities())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{LegacyEngine, StdEngine};

    fn line_instance() -> Arc<TspInstance> {
        // cities on a line at x = 0, 1, 3, 6
        Arc::new(
            TspInstance::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (6.0, 0.0)])
                .unwrap(),
        )
    }

    #[test]
    fn test_create_random_is_valid() {
        let mut op = CreateRandom::new(10).unwrap();
        let mut rng = StdEngine::from_seed(42);
        for _ in 0..100 {
            let tour = op.create(&mut rng).unwrap();
            assert_eq!(tour.num_cities(), 10);
            assert!(tour.validate().is_ok());
        }
    }

    #[test]
    fn test_create_random_small_sizes() {
        let mut rng = StdEngine::from_seed(1);
        assert_eq!(CreateRandom::new(1).unwrap().create(&mut rng).unwrap().path(), &[0, 0]);
        assert_eq!(
            CreateRandom::new(2).unwrap().create(&mut rng).unwrap().path(),
            &[0, 1, 0]
        );
        assert!(CreateRandom::new(0).is_err());
    }

    #[test]
    fn test_create_random_is_reproducible() {
        let mut op = CreateRandom::new(20).unwrap();
        let a = op.create(&mut LegacyEngine::from_seed(9)).unwrap();
        let b = op.create(&mut LegacyEngine::from_seed(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_create_random_reaches_every_permutation() {
        // 4 cities -> 3! = 6 distinct cycles with city 0 fixed
        let mut op = CreateRandom::new(4).unwrap();
        let mut rng = StdEngine::from_seed(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(op.create(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_greedy_from_start() {
        let op = CreateGreedy::new(line_instance());
        // from x=3: nearest is x=1 (2), then x=0 (1), then x=6 (6)
        let tour = op.from_start(2).unwrap();
        assert_eq!(tour.path(), &[0, 3, 2, 1, 0]);
        assert!(op.from_start(4).is_err());
    }

    #[test]
    fn test_greedy_breaks_ties_by_index() {
        let instance = Arc::new(
            TspInstance::from_matrix(vec![
                vec![0, 5, 5, 5],
                vec![5, 0, 1, 1],
                vec![5, 1, 0, 1],
                vec![5, 1, 1, 0],
            ])
            .unwrap(),
        );
        let op = CreateGreedy::new(instance);
        assert_eq!(op.from_start(0).unwrap().path(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_greedy_create_is_valid() {
        let mut op = CreateGreedy::new(line_instance());
        let mut rng = StdEngine::new();
        let tour = op.create(&mut rng).unwrap();
        assert!(tour.validate().is_ok());
        assert_eq!(op.id().name(), "CreateGreedy");
    }
}
