//! Error types for tour computation.

use thiserror::Error;

/// Shape and content problems in the waypoint list or cost matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// No waypoints (or an empty matrix) were supplied.
    #[error("at least one waypoint is required")]
    Empty,
    /// The matrix does not have one row per waypoint.
    #[error("matrix has {actual} rows, expected {expected}")]
    RowCount {
        /// Required number of rows.
        expected: usize,
        /// Rows actually present.
        actual: usize,
    },
    /// A matrix row does not have one column per waypoint.
    #[error("matrix row {row} has {actual} columns, expected {expected}")]
    RowLength {
        /// Offending row index.
        row: usize,
        /// Required number of columns.
        expected: usize,
        /// Columns actually present.
        actual: usize,
    },
    /// The waypoint id list and the matrix disagree on N.
    #[error("{ids} waypoint ids for a {size}x{size} matrix")]
    IdCountMismatch {
        /// Number of waypoint ids.
        ids: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// A finite cell holds a negative cost.
    #[error("negative cost {value} at [{from}][{to}]")]
    NegativeCost {
        /// Source index.
        from: usize,
        /// Destination index.
        to: usize,
        /// The rejected value.
        value: f64,
    },
    /// Exhaustive search was requested for more waypoints than allowed.
    #[error("brute force is limited to {limit} waypoints, got {count}")]
    TooManyWaypoints {
        /// Number of waypoints in the request.
        count: usize,
        /// Configured upper bound.
        limit: usize,
    },
}

/// Failure of a single ordering computation.
///
/// None of these are retried internally. [`OptimizeError::is_caller_error`]
/// separates malformed requests from broken upstream data.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Malformed or mismatched input shape.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// The supplied initial order is not a permutation starting at 0.
    #[error("invalid initial order: {0}")]
    InvalidOrder(String),
    /// A needed matrix cell is missing or non-finite.
    #[error("invalid cost at [{from}][{to}]")]
    InvalidCost {
        /// Source index.
        from: usize,
        /// Destination index.
        to: usize,
    },
    /// Nearest neighbor found no finite edge to any unvisited waypoint.
    #[error("no reachable unvisited waypoint from {from}")]
    NoReachableNode {
        /// Position the search was stuck at.
        from: usize,
    },
    /// The edge from the last waypoint back to the start is not finite.
    #[error("cannot close tour: edge [{from}][0] is not finite")]
    UnclosableTour {
        /// Last visited waypoint.
        from: usize,
    },
    /// Exhaustive search produced no closed circuit.
    #[error("no closed tour exists from the start waypoint")]
    NoFeasibleTour,
    /// The request body could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl OptimizeError {
    pub fn invalid_order(message: impl Into<String>) -> Self {
        Self::InvalidOrder(message.into())
    }

    /// Returns `true` when the request itself is at fault (4xx-class),
    /// `false` when the matrix data is broken (5xx-class).
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidOrder(_) | Self::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_error_classification() {
        assert!(OptimizeError::from(ValidationError::Empty).is_caller_error());
        assert!(OptimizeError::invalid_order("dup").is_caller_error());
        assert!(!OptimizeError::InvalidCost { from: 0, to: 1 }.is_caller_error());
        assert!(!OptimizeError::NoReachableNode { from: 2 }.is_caller_error());
        assert!(!OptimizeError::UnclosableTour { from: 2 }.is_caller_error());
        assert!(!OptimizeError::NoFeasibleTour.is_caller_error());
    }

    #[test]
    fn test_messages() {
        let err = OptimizeError::from(ValidationError::RowLength {
            row: 1,
            expected: 3,
            actual: 2,
        });
        assert_eq!(
            err.to_string(),
            "validation failed: matrix row 1 has 2 columns, expected 3"
        );
        assert_eq!(
            OptimizeError::InvalidCost { from: 2, to: 0 }.to_string(),
            "invalid cost at [2][0]"
        );
    }
}
