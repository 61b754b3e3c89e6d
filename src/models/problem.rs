//! Waypoint ordering problem instance.

use crate::distance::CostMatrix;
use crate::error::{OptimizeError, Result, ValidationError};

use super::{CostMode, Step};

/// Waypoint ids, their cost matrix, and the cost mode, validated together.
///
/// Index 0 is the fixed start and end of every tour.
///
/// # Examples
///
/// ```
/// use waypoint_order::distance::CostMatrix;
/// use waypoint_order::models::{CostMode, TourProblem};
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 573.0, 1169.5],
///     vec![573.0, 0.0, 597.0],
///     vec![1169.5, 597.0, 0.0],
/// ])
/// .expect("square");
/// let problem = TourProblem::new(vec!["A".into(), "B".into(), "C".into()], matrix, CostMode::Duration)
///     .expect("ids match matrix");
/// assert_eq!(problem.len(), 3);
/// assert_eq!(problem.edges().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct TourProblem {
    waypoint_ids: Vec<String>,
    matrix: CostMatrix,
    mode: CostMode,
}

impl TourProblem {
    /// Creates a problem, checking that there is one id per matrix row.
    pub fn new(
        waypoint_ids: Vec<String>,
        matrix: CostMatrix,
        mode: CostMode,
    ) -> std::result::Result<Self, ValidationError> {
        if waypoint_ids.is_empty() {
            return Err(ValidationError::Empty);
        }
        if waypoint_ids.len() != matrix.size() {
            return Err(ValidationError::IdCountMismatch {
                ids: waypoint_ids.len(),
                size: matrix.size(),
            });
        }
        Ok(Self {
            waypoint_ids,
            matrix,
            mode,
        })
    }

    /// Builds a problem from raw rows, validating the shape.
    pub fn from_rows(
        waypoint_ids: Vec<String>,
        rows: Vec<Vec<f64>>,
        mode: CostMode,
    ) -> std::result::Result<Self, ValidationError> {
        if rows.len() != waypoint_ids.len() {
            return Err(ValidationError::RowCount {
                expected: waypoint_ids.len(),
                actual: rows.len(),
            });
        }
        Self::new(waypoint_ids, CostMatrix::from_rows(rows)?, mode)
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoint_ids.len()
    }

    /// Always `false`: construction rejects empty inputs.
    pub fn is_empty(&self) -> bool {
        self.waypoint_ids.is_empty()
    }

    /// Waypoint ids by index.
    pub fn waypoint_ids(&self) -> &[String] {
        &self.waypoint_ids
    }

    /// The cost matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Cost mode of the matrix cells.
    pub fn mode(&self) -> CostMode {
        self.mode
    }

    /// Checked cost of `from → to`.
    ///
    /// Fails with [`OptimizeError::InvalidCost`] if the cell is non-finite.
    pub fn cost(&self, from: usize, to: usize) -> Result<f64> {
        let v = self.matrix.get(from, to);
        if v.is_finite() {
            Ok(v)
        } else {
            Err(OptimizeError::InvalidCost { from, to })
        }
    }

    /// Builds the step for `from → to` with the given cost.
    pub fn step(&self, from: usize, to: usize, cost: f64) -> Step {
        Step::new(
            from,
            to,
            self.waypoint_ids[from].as_str(),
            self.waypoint_ids[to].as_str(),
            cost,
            self.mode,
        )
    }

    /// All N·(N−1) off-diagonal directed edges, in row-major order.
    ///
    /// Non-finite cells are included with their raw cost; callers decide
    /// whether to skip or reject them.
    pub fn edges(&self) -> Vec<Step> {
        let n = self.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    edges.push(self.step(i, j, self.matrix.get(i, j)));
                }
            }
        }
        edges
    }
}
