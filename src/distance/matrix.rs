//! Dense cost matrix.

use crate::error::ValidationError;

/// A dense n×n travel cost matrix stored in row-major order.
///
/// Cells hold either distances or durations. A non-finite cell (NaN for a
/// missing value, or ±∞) marks an untraversable edge. The diagonal is never
/// read by the ordering algorithms.
///
/// # Examples
///
/// ```
/// use waypoint_order::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 573.0, 1169.5],
///     vec![573.0, 0.0, 597.0],
///     vec![1169.5, 597.0, 0.0],
/// ])
/// .expect("square matrix");
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(1, 2), 597.0);
/// assert!(cm.is_symmetric(1e-9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Fails if there are no rows, if any row length differs from the row
    /// count, or if a finite cell is negative.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let size = rows.len();
        if size == 0 {
            return Err(ValidationError::Empty);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(ValidationError::RowLength {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from a flat row-major grid of `size * size` cells.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::Empty);
        }
        if data.len() != size * size {
            return Err(ValidationError::RowCount {
                expected: size,
                actual: data.len() / size,
            });
        }
        if let Some(pos) = data.iter().position(|v| v.is_finite() && *v < 0.0) {
            return Err(ValidationError::NegativeCost {
                from: pos / size,
                to: pos % size,
                value: data[pos],
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the cost of the edge `from → to`, possibly non-finite.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns `true` if `from → to` is an off-diagonal edge with a finite cost.
    pub fn is_traversable(&self, from: usize, to: usize) -> bool {
        from != to && self.get(from, to).is_finite()
    }

    /// Number of waypoints in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the matrix as nested rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size).map(<[f64]>::to_vec).collect()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Pairs where either direction is non-finite count as asymmetric unless
    /// both are non-finite.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                match (a.is_finite(), b.is_finite()) {
                    (true, true) if (a - b).abs() > tol => return false,
                    (true, false) | (false, true) => return false,
                    _ => {}
                }
            }
        }
        true
    }

    /// Returns the cheapest finite edge from `from` among `candidates`.
    ///
    /// Candidates are scanned in the given order and the first one wins on
    /// equal cost. Returns `None` if no candidate is reachable.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
        candidates
            .iter()
            .copied()
            .filter(|&c| self.is_traversable(from, c))
            .map(|c| (c, self.get(from, c)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
