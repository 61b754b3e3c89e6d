//! Exhaustive search over all closed tours.
//!
//! # Algorithm
//!
//! Tours are grown round by round from the fixed start. Round 1 opens one
//! partial route per traversable edge leaving waypoint 0. Every following
//! round branches each partial route once per traversable edge to an
//! unvisited waypoint. In the last round the only legal continuation is the
//! edge back to waypoint 0, so every survivor is a closed circuit.
//!
//! The work-list is replaced wholesale after each round; there is no
//! recursion and nothing outlives the call.
//!
//! # Complexity
//!
//! O((n−1)!) partial routes in the final round. Only practical up to about
//! ten waypoints; callers are expected to cap n (see
//! [`SolverConfig::brute_force_limit`](crate::config::SolverConfig)).

use std::time::Instant;

use crate::error::{OptimizeError, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{Algorithm, Tour, TourProblem};

/// A route that has not yet returned to the start.
#[derive(Debug, Clone)]
struct PartialRoute {
    order: Vec<usize>,
    visited: Vec<bool>,
    total: f64,
}

impl PartialRoute {
    fn open(n: usize, first: usize, cost: f64) -> Self {
        let mut visited = vec![false; n];
        visited[0] = true;
        visited[first] = true;
        Self {
            order: vec![0, first],
            visited,
            total: cost,
        }
    }

    fn current(&self) -> usize {
        self.order[self.order.len() - 1]
    }

    fn extend(&self, next: usize, cost: f64) -> Self {
        let mut route = self.clone();
        route.order.push(next);
        route.visited[next] = true;
        route.total += cost;
        route
    }

    fn close(&self, cost: f64) -> Self {
        let mut route = self.clone();
        route.total += cost;
        route
    }
}

/// Finds the minimum-cost closed tour by evaluating every circuit from waypoint 0.
///
/// Non-finite matrix cells are treated as missing edges. Among tours of
/// equal cost the first one generated wins.
///
/// # Errors
///
/// [`OptimizeError::NoFeasibleTour`] if no closed circuit exists.
///
/// # Examples
///
/// ```
/// use waypoint_order::models::{CostMode, TourProblem};
/// use waypoint_order::exact::brute_force;
///
/// let problem = TourProblem::from_rows(
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![
///         vec![0.0, 573.0, 1169.5],
///         vec![573.0, 0.0, 597.0],
///         vec![1169.5, 597.0, 0.0],
///     ],
///     CostMode::Duration,
/// )
/// .expect("valid");
/// let tour = brute_force(&problem).expect("connected");
/// assert!((tour.total_cost() - 2339.5).abs() < 1e-9);
/// assert_eq!(tour.stops(), vec!["A", "B", "C", "A"]);
/// ```
pub fn brute_force(problem: &TourProblem) -> Result<Tour> {
    let started = Instant::now();
    let n = problem.len();
    let evaluator = TourEvaluator::new(problem);

    if n == 1 {
        let tour = evaluator.build_tour(Algorithm::BruteForce, &[0])?;
        return Ok(tour.with_compute_time(started.elapsed()));
    }

    let mut outgoing: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for edge in problem.edges().into_iter().filter(|e| e.cost.is_finite()) {
        outgoing[edge.source_index].push((edge.destination_index, edge.cost));
    }

    let mut routes: Vec<PartialRoute> = outgoing[0]
        .iter()
        .map(|&(dst, cost)| PartialRoute::open(n, dst, cost))
        .collect();

    for round in 2..=n {
        if routes.is_empty() {
            break;
        }
        let closing = round == n;
        let mut next = Vec::with_capacity(routes.len() * (n - round).max(1));
        for route in &routes {
            for &(dst, cost) in &outgoing[route.current()] {
                if closing {
                    if dst == 0 {
                        next.push(route.close(cost));
                    }
                } else if dst != 0 && !route.visited[dst] {
                    next.push(route.extend(dst, cost));
                }
            }
        }
        log::debug!("brute_force: round={round} routes={}", next.len());
        routes = next;
    }

    let best = routes
        .iter()
        .reduce(|best, r| if r.total < best.total { r } else { best })
        .ok_or(OptimizeError::NoFeasibleTour)?;

    let tour = evaluator.build_tour(Algorithm::BruteForce, &best.order)?;
    Ok(tour.with_compute_time(started.elapsed()))
}
