//! Tour assembly, validation, and candidate selection.

mod evaluator;

pub use evaluator::{best_tour, TourEvaluator, TourViolation};
