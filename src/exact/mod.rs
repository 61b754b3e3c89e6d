//! Exact tour search.
//!
//! - [`brute_force`] — Exhaustive enumeration from the fixed start, O((n−1)!)

mod brute_force;

pub use brute_force::brute_force;
