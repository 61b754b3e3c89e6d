//! Local search operators for improving tours.
//!
//! - [`two_opt`] — 2-opt segment reversal with a fixed start

mod two_opt;

pub use two_opt::{two_opt, two_opt_from_tour};
