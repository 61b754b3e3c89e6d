//! Travel cost matrices.
//!
//! Provides a dense, validated distance/duration matrix.

mod matrix;

pub use matrix::CostMatrix;
