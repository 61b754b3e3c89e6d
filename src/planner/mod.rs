//! Strategy selection and orchestration over the ordering algorithms.
//!
//! - [`Strategy`] — Which algorithm(s) to run
//! - [`Planner`] — Runs a strategy against a problem and picks the best tour

mod runner;
mod strategy;

pub use runner::Planner;
pub use strategy::Strategy;
