//! # Traveling Salesman Problem
//!
//! Array-based components for the symmetric and asymmetric TSP:
//!
//! - [`TspInstance`]: the cost matrix.
//! - [`Tour`]: a closed Hamiltonian cycle stored as `n + 1` cities, always
//!   starting and ending at city `0`.
//! - [`CreateRandom`] and [`CreateGreedy`]: create operators.
//! - [`TourLength`]: the objective function.
//! - [`TwoOptMove`], [`RandomTwoOpt`], [`TwoOptDelta`] and
//!   [`TwoOptPerturbation`]: the 2-opt neighbourhood as parameters, delta
//!   evaluation and complete neighbours.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use onion::operators::{CreateOperator, ObjectiveFunction};
//! use onion::rng::StdEngine;
//! use onion::tsp::{CreateGreedy, TourLength, TspInstance};
//!
//! let instance = Arc::new(TspInstance::from_coordinates(&[
//!     (0.0, 0.0),
//!     (3.0, 0.0),
//!     (3.0, 4.0),
//!     (0.0, 4.0),
//! ])?);
//!
//! let mut rng = StdEngine::from_seed(42);
//! let tour = CreateGreedy::new(Arc::clone(&instance)).create(&mut rng)?;
//! assert_eq!(TourLength::new(instance).evaluate(&tour), 14);
//! # Ok::<(), onion::error::OnionError>(())
//! ```

mod create;
mod instance;
mod objective;
mod tour;
mod two_opt;

pub use create::{CreateGreedy, CreateRandom};
pub use instance::TspInstance;
pub use objective::TourLength;
pub use tour::Tour;
pub use two_opt::{RandomTwoOpt, TwoOptDelta, TwoOptMove, TwoOptPerturbation};
