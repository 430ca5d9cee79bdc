//! # LocalSearchOptions
//!
//! Configuration of a [`LocalSearch`](super::LocalSearch) run: the iteration
//! budget, the number of consecutive iterations without an accepted
//! candidate after which the search stops, the candidate count from which
//! evaluation runs in parallel, and the logging level.
//!
//! ## Example
//!
//! ```rust
//! use onion::local_search::{LocalSearchOptions, LogLevel};
//!
//! // Create a new LocalSearchOptions instance with custom parameters
//! let custom_options = LocalSearchOptions::new(5_000, 200, LogLevel::Minimal);
//!
//! // Create a new LocalSearchOptions instance with default parameters
//! let default_options = LocalSearchOptions::default();
//! assert_eq!(default_options.get_max_iterations(), 1000);
//! ```

use crate::error::{OnionError, Result};

/// How much a search run reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// One `debug` event per iteration plus the final summary.
    Verbose,
    /// The final summary only, at `info`.
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSearchOptions {
    max_iterations: usize,
    max_non_improving: usize,
    /// Minimum number of candidates to evaluate in parallel
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl LocalSearchOptions {
    pub fn new(max_iterations: usize, max_non_improving: usize, log_level: LogLevel) -> Self {
        Self {
            max_iterations,
            max_non_improving,
            log_level,
            parallel_threshold: 1000, // Default parallel threshold
        }
    }

    /// Creates a new `LocalSearchOptions` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `max_iterations` - Upper bound on the number of iterations.
    /// * `max_non_improving` - Consecutive iterations without an accepted candidate
    ///   after which the search stops.
    /// * `log_level` - The logging level for the search.
    /// * `parallel_threshold` - The minimum number of candidates to evaluate in parallel.
    pub fn new_with_threshold(
        max_iterations: usize,
        max_non_improving: usize,
        log_level: LogLevel,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            max_iterations,
            max_non_improving,
            log_level,
            parallel_threshold,
        }
    }

    /// Checks that the budgets are usable.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::Configuration`] if `max_iterations` or
    /// `max_non_improving` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(OnionError::Configuration(
                "Maximum iterations must be greater than 0".to_string(),
            ));
        }
        if self.max_non_improving == 0 {
            return Err(OnionError::Configuration(
                "Maximum non-improving iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn get_max_non_improving(&self) -> usize {
        self.max_non_improving
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }
}

impl Default for LocalSearchOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_non_improving: 100,
            log_level: LogLevel::None,
            parallel_threshold: 1000,
        }
    }
}
