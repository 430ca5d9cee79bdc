//! # Error Types
//!
//! This module defines the error type shared by every fallible operation in the
//! framework. Random draws themselves never fail; errors come from checked
//! range requests, malformed problem data, and incomplete algorithm
//! configuration.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use onion::error::{OnionError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use onion::error::{OnionError, OptionExt};
//!
//! fn cheapest(costs: &[u32]) -> onion::error::Result<u32> {
//!     costs.iter().min().cloned().ok_or_else_onion(|| OnionError::EmptyCandidates)
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the framework.
#[derive(Error, Debug)]
pub enum OnionError {
    /// A range draw was requested with `min > max`.
    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: u32, max: u32 },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when problem data is malformed.
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// Error that occurs when a solution breaks the invariants of its representation.
    #[error("Invalid solution: {0}")]
    InvalidSolution(String),

    /// Error that occurs when an operation needs at least one candidate.
    #[error("Empty candidate set: Cannot operate on an empty set of candidates")]
    EmptyCandidates,

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for framework operations.
///
/// ## Examples
///
/// ```rust
/// use onion::error::Result;
///
/// fn may_fail() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, OnionError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, OnionError>` using a closure
    /// to generate the error.
    fn ok_or_else_onion<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> OnionError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_onion<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> OnionError,
    {
        self.ok_or_else(err_fn)
    }
}
