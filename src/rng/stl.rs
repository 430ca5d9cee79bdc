use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::fmt::Debug;
use tracing::trace;

use super::{ordered, IntT, RandomEngine, RealT};

/// A [`RandomEngine`] backed by a `rand` generator and the `rand` uniform
/// distributions.
///
/// The generator is a type parameter because `rand` generators share traits,
/// not a common base type. `StdRng` is the default.
///
/// # Examples
///
/// ```rust
/// use onion::rng::{RandomEngine, StdEngine};
///
/// let mut a = StdEngine::from_seed(42);
/// let mut b = StdEngine::from_seed(42);
/// assert_eq!(a.uniform_int_between(1, 10), b.uniform_int_between(1, 10));
/// ```
#[derive(Debug, Clone)]
pub struct StdEngine<R = StdRng> {
    rng: R,
}

impl StdEngine {
    /// Creates a `StdRng` engine seeded from the system entropy.
    pub fn new() -> Self {
        Self::from_entropy()
    }

    /// Creates a `StdRng` engine with a specific seed.
    ///
    /// A seed of `0` behaves like [`StdEngine::new`].
    pub fn from_seed(seed: IntT) -> Self {
        Self::seeded(seed)
    }
}

impl<R> StdEngine<R>
where
    R: SeedableRng + RngCore + Debug,
{
    /// Creates an engine over generator `R`, seeded from the system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: R::from_entropy(),
        }
    }

    /// Creates an engine over generator `R` with a specific seed.
    ///
    /// Only a seed of `0` reads the system entropy.
    pub fn seeded(seed: IntT) -> Self {
        Self {
            rng: generator(seed),
        }
    }
}

fn generator<R: SeedableRng>(seed: IntT) -> R {
    if seed == 0 {
        R::from_entropy()
    } else {
        R::seed_from_u64(u64::from(seed))
    }
}

impl<R> Default for StdEngine<R>
where
    R: SeedableRng + RngCore + Debug,
{
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R> RandomEngine for StdEngine<R>
where
    R: SeedableRng + RngCore + Debug + Send,
{
    fn uniform_int(&mut self) -> IntT {
        self.rng.gen()
    }

    fn uniform_int_between(&mut self, min: IntT, max: IntT) -> IntT {
        let (min, max) = ordered(min, max);
        self.rng.gen_range(min..=max)
    }

    fn uniform_real_01(&mut self) -> RealT {
        self.rng.gen_range(0.0..=1.0)
    }

    fn seed(&mut self, s: IntT) {
        trace!(seed = s, "reseeding std engine");
        self.rng = generator(s);
    }
}
