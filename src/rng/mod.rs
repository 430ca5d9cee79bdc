//! # Random Engines
//!
//! Every random decision in the framework goes through the [`RandomEngine`]
//! trait. Keeping a single abstraction makes runs reproducible: seed the active
//! engine with a non-zero value and the whole algorithm replays the same
//! sequence, whichever backend is installed.
//!
//! Two backends are provided:
//!
//! - [`StdEngine`]: wraps any `rand` generator (`StdRng` by default) and the
//!   `rand` uniform distributions. Exactly uniform within the limits of the
//!   generator.
//! - [`LegacyEngine`]: a libc-style `rand()` generator with modulo range
//!   reduction. Only approximately uniform; kept to reproduce results of
//!   programs built on the C standard library.
//!
//! Engines are owned by an [`EngineRegistry`], which can be passed around
//! explicitly. For call sites that cannot thread a registry through, the
//! process has one active engine reachable through [`random`] and
//! replaceable with [`set_random_engine`].
//!
//! ## Example
//!
//! ```rust
//! use onion::rng::{random, set_random_engine, LegacyEngine, RandomEngine};
//!
//! // changes the active engine of the process to the legacy backend
//! set_random_engine(Box::new(LegacyEngine::new()));
//!
//! // a random integer in [1, 10]
//! let rndi = random().uniform_int_between(1, 10);
//! assert!((1..=10).contains(&rndi));
//!
//! // a random real number in [0, 1]
//! let rndd = random().uniform_real_01();
//! assert!((0.0..=1.0).contains(&rndd));
//! ```

use std::fmt::Debug;

use crate::error::{OnionError, Result};

mod active;
mod legacy;
mod registry;
mod stl;

pub use active::{random, reset_random_engine, set_random_engine, with_random, ActiveEngine};
pub use legacy::{LegacyEngine, LEGACY_RAND_MAX};
pub use registry::EngineRegistry;
pub use stl::StdEngine;

/// Integer type produced by every engine.
pub type IntT = u32;

/// Real type produced by every engine.
pub type RealT = f64;

/// The contract every random number backend satisfies.
///
/// None of the operations fail. An engine is a plain value with its own
/// generator state; two engines never share state. Engines are `Send` so that
/// any of them can be installed as the process-wide active engine.
///
/// # Seeding
///
/// `seed(0)` reseeds from a high-resolution, non-deterministic source, so two
/// calls in quick succession do not collide. Any other value reseeds
/// deterministically: two engines of the same backend seeded with the same
/// non-zero value produce identical sequences afterwards.
pub trait RandomEngine: Debug + Send {
    /// Returns a value uniformly distributed over the engine's integer range.
    fn uniform_int(&mut self) -> IntT;

    /// Returns a value uniformly distributed in the closed interval `[min, max]`.
    ///
    /// Callers must pass `min <= max`. Implementations `debug_assert!` the
    /// contract and otherwise draw from `[max, min]`. Use
    /// [`try_uniform_int_between`](RandomEngine::try_uniform_int_between) to
    /// get an error instead.
    fn uniform_int_between(&mut self, min: IntT, max: IntT) -> IntT;

    /// Returns a value uniformly distributed in the closed interval `[0.0, 1.0]`.
    fn uniform_real_01(&mut self) -> RealT;

    /// Reseeds the engine. `0` means "from entropy".
    fn seed(&mut self, s: IntT);

    /// Reseeds the engine from entropy.
    fn reseed(&mut self) {
        self.seed(0);
    }

    /// Checked variant of `uniform_int_between`.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidRange`] when `min > max`.
    fn try_uniform_int_between(&mut self, min: IntT, max: IntT) -> Result<IntT> {
        if min > max {
            return Err(OnionError::InvalidRange { min, max });
        }
        Ok(self.uniform_int_between(min, max))
    }

    /// Returns an index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or does not fit in [`IntT`].
    fn uniform_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        assert!(
            len - 1 <= IntT::MAX as usize,
            "index range exceeds the engine's integer type"
        );
        self.uniform_int_between(0, (len - 1) as IntT) as usize
    }
}

impl<E: RandomEngine + ?Sized> RandomEngine for Box<E> {
    fn uniform_int(&mut self) -> IntT {
        (**self).uniform_int()
    }

    fn uniform_int_between(&mut self, min: IntT, max: IntT) -> IntT {
        (**self).uniform_int_between(min, max)
    }

    fn uniform_real_01(&mut self) -> RealT {
        (**self).uniform_real_01()
    }

    fn seed(&mut self, s: IntT) {
        (**self).seed(s)
    }
}

/// Orders a possibly reversed interval.
fn ordered(min: IntT, max: IntT) -> (IntT, IntT) {
    debug_assert!(min <= max, "uniform_int_between called with min > max");
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}
