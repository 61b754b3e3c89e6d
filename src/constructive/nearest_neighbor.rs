//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from waypoint 0, always move to the
//! cheapest unvisited waypoint, then return to the start. Never backtracks,
//! so the result is feasible but not necessarily optimal. Mostly used as a
//! seed for 2-opt and as a fallback when exhaustive search is too slow.
//!
//! # Complexity
//!
//! O(n²) where n = number of waypoints.

use std::time::Instant;

use crate::error::{OptimizeError, Result};
use crate::models::{Algorithm, Tour, TourProblem};

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// Candidates are scanned in index order and the first one wins on equal
/// cost. Non-finite edges are skipped.
///
/// # Errors
///
/// - [`OptimizeError::NoReachableNode`] if no unvisited waypoint is
///   reachable with a finite cost from the current position.
/// - [`OptimizeError::UnclosableTour`] if the edge from the last waypoint
///   back to the start is not finite.
///
/// # Examples
///
/// ```
/// use waypoint_order::models::{CostMode, TourProblem};
/// use waypoint_order::constructive::nearest_neighbor;
///
/// let problem = TourProblem::from_rows(
///     vec!["A".into(), "B".into(), "C".into(), "D".into()],
///     vec![
///         vec![0.0, 1.0, 2.0, 3.0],
///         vec![1.0, 0.0, 1.0, 2.0],
///         vec![2.0, 1.0, 0.0, 1.0],
///         vec![3.0, 2.0, 1.0, 0.0],
///     ],
///     CostMode::Distance,
/// )
/// .expect("valid");
/// let tour = nearest_neighbor(&problem).expect("connected");
/// assert_eq!(tour.order(), vec![0, 1, 2, 3]);
/// assert_eq!(tour.total_cost(), 6.0);
/// ```
pub fn nearest_neighbor(problem: &TourProblem) -> Result<Tour> {
    let started = Instant::now();
    let n = problem.len();
    let matrix = problem.matrix();

    if n == 1 {
        let steps = vec![problem.step(0, 0, 0.0)];
        return Ok(Tour::new(Algorithm::NearestNeighbour, steps, problem.mode())
            .with_compute_time(started.elapsed()));
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut current = 0;
    let mut steps = Vec::with_capacity(n);

    for _ in 1..n {
        let candidates: Vec<usize> = (0..n).filter(|&j| !visited[j]).collect();
        let (next, cost) = matrix
            .nearest_neighbor(current, &candidates)
            .ok_or(OptimizeError::NoReachableNode { from: current })?;

        steps.push(problem.step(current, next, cost));
        visited[next] = true;
        current = next;
    }

    let closing = matrix.get(current, 0);
    if !closing.is_finite() {
        return Err(OptimizeError::UnclosableTour { from: current });
    }
    steps.push(problem.step(current, 0, closing));

    Ok(Tour::new(Algorithm::NearestNeighbour, steps, problem.mode())
        .with_compute_time(started.elapsed()))
}
