//! # waypoint-order
//!
//! Closed-tour ordering for a small set of waypoints, given a precomputed
//! cost matrix of distances (meters) or durations (seconds). Every tour
//! starts and ends at waypoint 0.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance, steps, tours, cost mode
//! - [`distance`] — Validated cost matrix
//! - [`evaluation`] — Order validation, pricing, and tour invariant checks
//! - [`exact`] — Exhaustive search (brute force)
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — 2-opt improvement
//! - [`planner`] — Strategy selection across algorithms
//! - [`request`] — JSON request boundary
//! - [`config`] — Solver settings
//! - [`format`] — Kilometer and `HH:MM:SS` rendering
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod format;
pub mod local_search;
pub mod models;
pub mod planner;
pub mod request;

pub use error::{OptimizeError, Result, ValidationError};
