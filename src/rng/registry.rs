use tracing::debug;

use super::{RandomEngine, StdEngine};

/// Owner of exactly one active [`RandomEngine`].
///
/// A registry always holds a usable, already seeded engine: [`EngineRegistry::new`]
/// installs a [`StdEngine`] seeded from entropy, and the only way to remove
/// an engine is to install another one in its place. The replaced engine is
/// dropped on the spot by [`install`](EngineRegistry::install), or handed back
/// to the caller by [`replace`](EngineRegistry::replace).
///
/// Pass a registry (or `registry.engine()`) down to the code that needs
/// randomness. Sharing one across threads requires external synchronization,
/// as the process-wide registry behind [`random`](super::random) does.
///
/// # Examples
///
/// ```rust
/// use onion::rng::{EngineRegistry, LegacyEngine, RandomEngine};
///
/// let mut registry = EngineRegistry::new();
/// registry.install(Box::new(LegacyEngine::from_seed(42)));
///
/// let mut reference = LegacyEngine::from_seed(42);
/// assert_eq!(
///     registry.engine().uniform_int_between(1, 10),
///     reference.uniform_int_between(1, 10)
/// );
/// ```
#[derive(Debug)]
pub struct EngineRegistry {
    engine: Box<dyn RandomEngine>,
}

impl EngineRegistry {
    /// Creates a registry holding a [`StdEngine`] seeded from entropy.
    pub fn new() -> Self {
        Self::with_engine(Box::new(StdEngine::new()))
    }

    /// Creates a registry holding `engine`.
    pub fn with_engine(engine: Box<dyn RandomEngine>) -> Self {
        Self { engine }
    }

    /// Returns the active engine.
    pub fn engine(&mut self) -> &mut dyn RandomEngine {
        self.engine.as_mut()
    }

    /// Installs `engine` and drops the previously active one.
    pub fn install(&mut self, engine: Box<dyn RandomEngine>) {
        let previous = self.replace(engine);
        drop(previous);
    }

    /// Installs `engine` and returns the previously active one.
    pub fn replace(&mut self, engine: Box<dyn RandomEngine>) -> Box<dyn RandomEngine> {
        debug!(previous = ?self.engine, next = ?engine, "swapping random engine");
        std::mem::replace(&mut self.engine, engine)
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
