pub mod component;
pub mod error;
pub mod local_search;
pub mod operators;
pub mod rng;
pub mod tsp;

// Re-export commonly used types for convenience
pub use component::{ComponentId, ComponentIdBuilder, Identified};
pub use error::{OnionError, OptionExt, Result};
pub use rng::{random, set_random_engine, EngineRegistry, RandomEngine};
