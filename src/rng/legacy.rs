use rand::{thread_rng, Rng};
use tracing::trace;

use super::{ordered, IntT, RandomEngine, RealT};

/// Largest value [`LegacyEngine::uniform_int`] can return, `RAND_MAX` of the
/// C standard's sample `rand()`.
pub const LEGACY_RAND_MAX: IntT = 32767;

/// A [`RandomEngine`] reproducing the C standard library `rand()`/`srand()`
/// pair.
///
/// The generator is the reference linear congruential generator from the C
/// standard (`next = next * 1103515245 + 12345`, output bits 16..30). Its
/// output covers `[0, LEGACY_RAND_MAX]` only, and intervals are obtained with
/// a modulo reduction.
///
/// # Not uniform
///
/// `uniform_int_between` maps `LEGACY_RAND_MAX + 1` raw values onto the
/// interval with `%`. Whenever the interval size does not divide `32768`,
/// the low values of the interval receive one extra raw value each. For
/// `[0, 2]` the skew is tiny (10923/10923/10922 raw values); for
/// `[0, 19999]` the first 12768 values are twice as likely as the rest.
/// Intervals wider than `32768` values are never fully covered.
///
/// Prefer [`StdEngine`](super::StdEngine). This backend exists to reproduce
/// and compare results with programs built on the C library generator.
#[derive(Debug, Clone)]
pub struct LegacyEngine {
    next: u32,
}

impl LegacyEngine {
    /// Creates an engine seeded from entropy.
    pub fn new() -> Self {
        let mut engine = Self { next: 1 };
        engine.seed(0);
        engine
    }

    /// Creates an engine with a specific seed, like `srand(seed)`.
    ///
    /// A seed of `0` behaves like [`LegacyEngine::new`].
    pub fn from_seed(seed: IntT) -> Self {
        let mut engine = Self { next: 1 };
        engine.seed(seed);
        engine
    }

    fn rand(&mut self) -> IntT {
        self.next = self.next.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.next / 65_536) % (LEGACY_RAND_MAX + 1)
    }

    /// Maps a raw draw onto `[min, max]` the way `rand() % range + min` does.
    pub(crate) fn reduce(raw: IntT, min: IntT, max: IntT) -> IntT {
        let range = max.wrapping_sub(min).wrapping_add(1);
        if range == 0 {
            // [0, IntT::MAX]: the width itself overflows
            return raw.wrapping_add(min);
        }
        raw % range + min
    }
}

impl Default for LegacyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine for LegacyEngine {
    /// Returns a value in `[0, LEGACY_RAND_MAX]`, not the full `u32` range.
    fn uniform_int(&mut self) -> IntT {
        self.rand()
    }

    fn uniform_int_between(&mut self, min: IntT, max: IntT) -> IntT {
        let (min, max) = ordered(min, max);
        let raw = self.rand();
        Self::reduce(raw, min, max)
    }

    fn uniform_real_01(&mut self) -> RealT {
        RealT::from(self.rand()) / RealT::from(LEGACY_RAND_MAX)
    }

    fn seed(&mut self, s: IntT) {
        trace!(seed = s, "reseeding legacy engine");
        self.next = if s == 0 { thread_rng().gen() } else { s };
    }
}
