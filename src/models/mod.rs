//! Domain model types for waypoint ordering.
//!
//! Provides the problem instance (waypoint ids plus cost matrix), the cost
//! mode tag, directed steps, and the tour result shared by all algorithms.

mod mode;
mod problem;
mod step;
mod tour;

pub use mode::CostMode;
pub use problem::TourProblem;
pub use step::Step;
pub use tour::{Algorithm, Tour};
