use std::sync::Arc;

use onion::{
    local_search::{LocalSearchBuilder, LocalSearchOptions, LogLevel},
    operators::{Comparison, CreateOperator, ObjectiveFunction, SelectBest, SelectFirst},
    rng::{random, set_random_engine, LegacyEngine, StdEngine},
    tsp::{CreateGreedy, CreateRandom, Tour, TourLength, TspInstance, TwoOptPerturbation},
    Identified, OnionError,
};

/// Cities on a circle; the optimal tour visits them in angular order.
fn circle(n: usize, radius: f64) -> Arc<TspInstance> {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let angle = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Arc::new(TspInstance::from_coordinates(&points).unwrap())
}

fn angular_order_length(instance: &TspInstance) -> u64 {
    let n = instance.num_cities();
    (0..n)
        .map(|k| u64::from(instance.cost(k, (k + 1) % n)))
        .sum()
}

#[test]
fn test_local_search_improves_random_tour() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let n = 30;
    let instance = circle(n, 1000.0);
    let objective = TourLength::new(Arc::clone(&instance));
    let mut rng = StdEngine::from_seed(42);
    let start = CreateRandom::new(n).unwrap().create(&mut rng).unwrap();
    let start_length = objective.evaluate(&start);

    let mut search = LocalSearchBuilder::new()
        .with_create_operator(CreateRandom::new(n).unwrap())
        .with_perturbation_operator(TwoOptPerturbation::new(n, 50).unwrap())
        .with_objective_function(TourLength::new(Arc::clone(&instance)))
        .with_select_operator(SelectBest::minimizing())
        .with_options(LocalSearchOptions::new(5_000, 200, LogLevel::Minimal))
        .build()
        .unwrap();

    let result = search.run_from(start, &mut rng).unwrap();

    assert!(result.solution.validate().is_ok());
    assert!(result.value < start_length);
    assert_eq!(result.value, objective.evaluate(&result.solution));
    assert!(result.value >= angular_order_length(&instance));
    assert!(result.improvements > 0);
}

#[test]
fn test_greedy_on_circle_is_optimal() {
    let instance = circle(12, 500.0);
    let mut create = CreateGreedy::new(Arc::clone(&instance));
    let tour = create.create(&mut StdEngine::from_seed(3)).unwrap();
    assert_eq!(
        TourLength::new(Arc::clone(&instance)).evaluate(&tour),
        angular_order_length(&instance)
    );
}

#[test]
fn test_same_seed_same_search() {
    let instance = circle(15, 300.0);
    let run = |seed: u32| {
        let mut search = LocalSearchBuilder::new()
            .with_create_operator(CreateRandom::new(15).unwrap())
            .with_perturbation_operator(TwoOptPerturbation::new(15, 10).unwrap())
            .with_objective_function(TourLength::new(Arc::clone(&instance)))
            .with_select_operator(SelectFirst::new(Comparison::Less))
            .with_options(LocalSearchOptions::new(300, 30, LogLevel::None))
            .build()
            .unwrap();
        search.run(&mut LegacyEngine::from_seed(seed)).unwrap()
    };
    assert_eq!(run(17), run(17));
}

#[test]
fn test_search_through_active_engine() {
    set_random_engine(Box::new(StdEngine::from_seed(8)));
    let instance = circle(10, 100.0);
    let mut search = LocalSearchBuilder::new()
        .with_create_operator(CreateGreedy::new(Arc::clone(&instance)))
        .with_perturbation_operator(TwoOptPerturbation::new(10, 2000).unwrap())
        .with_objective_function(TourLength::new(Arc::clone(&instance)))
        .with_select_operator(SelectBest::minimizing())
        // candidate sets above the threshold are evaluated in parallel
        .with_options(LocalSearchOptions::new_with_threshold(20, 2, LogLevel::Verbose, 1000))
        .build()
        .unwrap();
    let result = search.run(&mut random()).unwrap();
    assert_eq!(result.value, angular_order_length(&instance));
}

#[test]
fn test_operators_sized_for_another_instance_are_rejected() {
    let instance = circle(5, 50.0);
    let result = LocalSearchBuilder::new()
        .with_create_operator(CreateRandom::new(8).unwrap())
        .with_perturbation_operator(TwoOptPerturbation::new(8, 4).unwrap())
        .with_objective_function(TourLength::new(instance))
        .with_select_operator(SelectBest::minimizing())
        .build();
    assert!(matches!(result, Err(OnionError::Configuration(_))));
}

#[test]
fn test_starting_tour_of_another_size_is_an_error() {
    let instance = circle(5, 50.0);
    let mut search = LocalSearchBuilder::new()
        .with_create_operator(CreateGreedy::new(Arc::clone(&instance)))
        .with_perturbation_operator(TwoOptPerturbation::new(5, 4).unwrap())
        .with_objective_function(TourLength::new(instance))
        .with_select_operator(SelectBest::minimizing())
        .build()
        .unwrap();
    let too_long = Tour::from_order((0..8).collect()).unwrap();
    assert!(matches!(
        search.run_from(too_long, &mut StdEngine::from_seed(1)),
        Err(OnionError::InvalidSolution(_))
    ));
}

#[test]
fn test_component_ids() {
    let instance = circle(5, 10.0);
    assert_eq!(CreateGreedy::new(Arc::clone(&instance)).id().problem(), "TSP");
    assert_eq!(TourLength::new(instance).id().kind(), "Objective Function");
    let rendered = CreateRandom::new(5).unwrap().id().to_string();
    assert!(rendered.starts_with("Name          : CreateRandom\n"));
    assert!(rendered.contains("Description   : Creates a random hamiltonian cycle.\n"));
}
