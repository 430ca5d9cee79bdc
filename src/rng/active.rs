//! The process-wide active engine.
//!
//! One [`EngineRegistry`] per process sits behind a mutex. It is empty until
//! an engine is installed with [`set_random_engine`] or the first draw
//! installs a [`StdEngine`](super::StdEngine) seeded from entropy, and
//! [`reset_random_engine`] tears it down again. Every thread draws from the
//! same engine, so a seeded run stays reproducible when work moves between
//! threads as long as the order of draws is deterministic.
//!
//! Code that wants its own stream should own an engine or an
//! [`EngineRegistry`] and pass it down instead.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{EngineRegistry, IntT, RandomEngine, RealT};

static ACTIVE: Mutex<Option<EngineRegistry>> = Mutex::new(None);

// A panic inside `with_random` cannot leave the registry half-swapped.
fn lock() -> MutexGuard<'static, Option<EngineRegistry>> {
    ACTIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with the process-wide active engine, installing the default
/// engine first if none is installed.
///
/// The engine stays locked while `f` runs; other threads drawing through
/// [`random`] wait for it.
///
/// # Panics
///
/// Deadlocks or panics if called re-entrantly from inside `f`, or from inside
/// a method of the active engine.
pub fn with_random<T>(f: impl FnOnce(&mut dyn RandomEngine) -> T) -> T {
    let mut active = lock();
    f(active.get_or_insert_with(EngineRegistry::new).engine())
}

/// Installs `engine` as the process-wide active engine, dropping the
/// previous one.
pub fn set_random_engine(engine: Box<dyn RandomEngine>) {
    let mut active = lock();
    match active.as_mut() {
        Some(registry) => registry.install(engine),
        None => {
            debug!(next = ?engine, "installing random engine");
            *active = Some(EngineRegistry::with_engine(engine));
        }
    }
}

/// Drops the process-wide active engine.
///
/// The next draw installs a fresh, entropy-seeded default engine.
pub fn reset_random_engine() {
    let previous = lock().take();
    if let Some(registry) = previous {
        debug!(previous = ?registry, "dropping random engine");
    }
}

/// Returns a handle to the process-wide active engine.
///
/// The handle implements [`RandomEngine`] and can be passed wherever an
/// engine is expected.
///
/// ```rust
/// use onion::rng::{random, RandomEngine};
///
/// let x = random().uniform_int_between(1, 6);
/// assert!((1..=6).contains(&x));
/// ```
pub fn random() -> ActiveEngine {
    ActiveEngine
}

/// Zero-sized handle that forwards every call to the active engine.
///
/// The handle holds no state, so an engine swapped in with
/// [`set_random_engine`] is picked up by handles obtained earlier, on any
/// thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActiveEngine;

impl RandomEngine for ActiveEngine {
    fn uniform_int(&mut self) -> IntT {
        with_random(|engine| engine.uniform_int())
    }

    fn uniform_int_between(&mut self, min: IntT, max: IntT) -> IntT {
        with_random(|engine| engine.uniform_int_between(min, max))
    }

    fn uniform_real_01(&mut self) -> RealT {
        with_random(|engine| engine.uniform_real_01())
    }

    fn seed(&mut self, s: IntT) {
        with_random(|engine| engine.seed(s))
    }
}
