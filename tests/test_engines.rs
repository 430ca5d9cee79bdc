use onion::{
    error::OnionError,
    rng::{IntT, LegacyEngine, RandomEngine, StdEngine, LEGACY_RAND_MAX},
};
use proptest::prelude::*;

const DRAWS: usize = 100_000;

/// Pearson's chi-squared statistic of `counts` against a uniform expectation.
fn chi_squared(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum()
}

fn histogram(engine: &mut dyn RandomEngine, min: IntT, max: IntT, draws: usize) -> Vec<usize> {
    let mut counts = vec![0usize; (max - min + 1) as usize];
    for _ in 0..draws {
        let v = engine.uniform_int_between(min, max);
        assert!((min..=max).contains(&v), "{} outside [{}, {}]", v, min, max);
        counts[(v - min) as usize] += 1;
    }
    counts
}

/// Share of draws in `[min, max]` that land below `threshold`.
fn share_below(engine: &mut dyn RandomEngine, min: IntT, max: IntT, threshold: usize) -> f64 {
    let hits = (0..DRAWS)
        .filter(|_| (engine.uniform_int_between(min, max) as usize) < threshold)
        .count();
    hits as f64 / DRAWS as f64
}

#[test]
fn test_std_engine_is_uniform() {
    let mut engine = StdEngine::from_seed(2024);
    let counts = histogram(&mut engine, 1, 10, DRAWS);
    // 9 degrees of freedom; 33.72 is the 0.9999 quantile
    let statistic = chi_squared(&counts);
    assert!(statistic < 33.72, "chi-squared statistic too large: {}", statistic);
}

#[test]
fn test_real_01_in_closed_interval_for_both_backends() {
    let mut engines: Vec<Box<dyn RandomEngine>> = vec![
        Box::new(StdEngine::from_seed(5)),
        Box::new(LegacyEngine::from_seed(5)),
    ];
    for engine in engines.iter_mut() {
        for _ in 0..DRAWS {
            let r = engine.uniform_real_01();
            assert!((0.0..=1.0).contains(&r), "{:?} produced {}", engine, r);
        }
    }
}

#[test]
fn test_same_nonzero_seed_reproduces_sequence() {
    let mut a = StdEngine::from_seed(42);
    let mut b = StdEngine::from_seed(42);
    let seq_a: Vec<_> = (0..5).map(|_| a.uniform_int_between(1, 10)).collect();
    let seq_b: Vec<_> = (0..5).map(|_| b.uniform_int_between(1, 10)).collect();
    assert_eq!(seq_a, seq_b);

    let mut c = LegacyEngine::from_seed(42);
    let mut d = LegacyEngine::from_seed(42);
    for _ in 0..1000 {
        assert_eq!(c.uniform_int(), d.uniform_int());
        assert_eq!(c.uniform_real_01(), d.uniform_real_01());
    }
}

#[test]
fn test_reseeding_existing_engine_matches_fresh_engine() {
    let mut used = StdEngine::new();
    for _ in 0..17 {
        used.uniform_int();
    }
    used.seed(99);
    let mut fresh = StdEngine::from_seed(99);
    for _ in 0..100 {
        assert_eq!(used.uniform_int(), fresh.uniform_int());
    }
}

#[test]
fn test_entropy_seeding_differs_between_engines() {
    for _ in 0..5 {
        let mut a = StdEngine::new();
        let mut b = StdEngine::new();
        let seq_a: Vec<_> = (0..10).map(|_| a.uniform_int()).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.uniform_int()).collect();
        assert_ne!(seq_a, seq_b);
    }

    for _ in 0..5 {
        let mut a = LegacyEngine::new();
        let mut b = LegacyEngine::new();
        a.reseed();
        b.seed(0);
        let seq_a: Vec<_> = (0..10).map(|_| a.uniform_int()).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.uniform_int()).collect();
        assert_ne!(seq_a, seq_b);
    }
}

#[test]
fn test_legacy_engine_shows_modulo_bias() {
    // 32768 raw values onto 20000 slots: values below 12768 get two raw
    // values each, the rest one.
    let (min, max) = (0, 19_999);
    let favoured = (LEGACY_RAND_MAX + 1 - (max - min + 1)) as usize;

    let legacy = share_below(&mut LegacyEngine::from_seed(7), min, max, favoured);
    let std = share_below(&mut StdEngine::from_seed(7), min, max, favoured);

    // uniform: 12768 / 20000 = 0.638; legacy: 25536 / 32768 = 0.779
    assert!((std - 0.638).abs() < 0.01, "std engine share: {}", std);
    assert!((legacy - 0.779).abs() < 0.01, "legacy engine share: {}", legacy);
}

#[test]
fn test_checked_range_reports_invalid_range() {
    let mut engine = LegacyEngine::from_seed(1);
    assert!(matches!(
        engine.try_uniform_int_between(10, 1),
        Err(OnionError::InvalidRange { min: 10, max: 1 })
    ));
}

proptest! {
    #[test]
    fn prop_std_draws_stay_in_range(a in any::<u32>(), b in any::<u32>(), seed in 1u32..) {
        let (min, max) = (a.min(b), a.max(b));
        let mut engine = StdEngine::from_seed(seed);
        for _ in 0..32 {
            let v = engine.uniform_int_between(min, max);
            prop_assert!(min <= v && v <= max);
        }
    }

    #[test]
    fn prop_legacy_draws_stay_in_range(a in any::<u32>(), b in any::<u32>(), seed in 1u32..) {
        let (min, max) = (a.min(b), a.max(b));
        let mut engine = LegacyEngine::from_seed(seed);
        for _ in 0..32 {
            let v = engine.uniform_int_between(min, max);
            prop_assert!(min <= v && v <= max);
        }
    }

    #[test]
    fn prop_same_seed_same_draws(seed in 1u32.., min in 0u32..1000, width in 0u32..1000) {
        let mut a = StdEngine::from_seed(seed);
        let mut b = StdEngine::from_seed(seed);
        for _ in 0..16 {
            prop_assert_eq!(
                a.uniform_int_between(min, min + width),
                b.uniform_int_between(min, min + width)
            );
        }
    }
}
