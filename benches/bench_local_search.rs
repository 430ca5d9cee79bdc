use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onion::{
    local_search::{LocalSearchBuilder, LocalSearchOptions, LogLevel},
    operators::{ObjectiveFunction, SelectBest},
    rng::StdEngine,
    tsp::{CreateRandom, TourLength, TspInstance, TwoOptPerturbation},
};
use rayon::prelude::*;

fn random_instance(n: usize, seed: u32) -> Arc<TspInstance> {
    use onion::rng::RandomEngine;
    let mut rng = StdEngine::from_seed(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                rng.uniform_real_01() * 10_000.0,
                rng.uniform_real_01() * 10_000.0,
            )
        })
        .collect();
    Arc::new(TspInstance::from_coordinates(&points).expect("valid coordinates"))
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt_search");
    group.sample_size(10);
    for n in [20, 50, 100] {
        let instance = random_instance(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, instance| {
            b.iter(|| {
                let mut search = LocalSearchBuilder::new()
                    .with_create_operator(CreateRandom::new(n).unwrap())
                    .with_perturbation_operator(TwoOptPerturbation::new(n, 64).unwrap())
                    .with_objective_function(TourLength::new(Arc::clone(instance)))
                    .with_select_operator(SelectBest::minimizing())
                    .with_options(LocalSearchOptions::new(1_000, 100, LogLevel::None))
                    .build()
                    .unwrap();
                black_box(search.run(&mut StdEngine::from_seed(1)).unwrap().value)
            })
        });
    }
    group.finish();
}

// where the parallel threshold starts to pay off
fn bench_candidate_evaluation(c: &mut Criterion) {
    let n = 200;
    let instance = random_instance(n, 11);
    let objective = TourLength::new(Arc::clone(&instance));

    let mut group = c.benchmark_group("candidate_evaluation");
    for count in [10, 100, 1_000, 10_000] {
        use onion::operators::{CreateOperator, PerturbationOperator};
        let mut rng = StdEngine::from_seed(3);
        let tour = CreateRandom::new(n).unwrap().create(&mut rng).unwrap();
        let candidates = TwoOptPerturbation::new(n, count)
            .unwrap()
            .perturb(&tour, &mut rng)
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    let values: Vec<u64> =
                        candidates.iter().map(|t| objective.evaluate(t)).collect();
                    black_box(values)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    let values: Vec<u64> =
                        candidates.par_iter().map(|t| objective.evaluate(t)).collect();
                    black_box(values)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_candidate_evaluation);
criterion_main!(benches);
