//! 2-opt improvement of a closed tour with a fixed start.
//!
//! # Algorithm
//!
//! For positions 1 ≤ i < k ≤ n−1 of the visit order, with
//! `a = order[i-1]`, `b = order[i]`, `c = order[k]`, `d = order[(k+1) % n]`,
//! replacing edges (a,b) and (c,d) by (a,c) and (b,d) reverses the segment
//! `order[i..=k]`:
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! The move is applied when `delta < -epsilon` and the scan restarts from
//! i = 1 (first-improvement strategy). The pair (1, n−1) is never tried so
//! waypoint 0 keeps its position. A pass is one scan; the search stops after
//! a pass without improvement or after `max_iterations` passes.
//!
//! On asymmetric matrices reversing a segment also flips every interior
//! edge. [`DeltaMode::Exact`] adds that change to the delta; the plain
//! four-endpoint formula is only exact for symmetric costs.
//!
//! # Complexity
//!
//! O(n²) per pass with the four-endpoint delta, O(n³) with the exact one.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::time::Instant;

use crate::config::{DeltaMode, SolverConfig};
use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::models::{Algorithm, Tour, TourProblem};

/// Improves a tour with 2-opt moves.
///
/// Starts from `initial_order` when given (which must be a permutation of
/// `0..n` starting with 0), otherwise from the identity order. The result is
/// labelled [`Algorithm::TwoOptNn`] or [`Algorithm::TwoOpt`] accordingly.
///
/// Stopping at the iteration cap is not an error: the best tour found is
/// returned with [`Tour::converged`] set to `false`.
///
/// # Errors
///
/// - [`OptimizeError::InvalidOrder`](crate::error::OptimizeError::InvalidOrder)
///   for a malformed `initial_order`, before any cost is read.
/// - [`OptimizeError::InvalidCost`](crate::error::OptimizeError::InvalidCost)
///   the first time a non-finite cell is read.
///
/// # Examples
///
/// ```
/// use waypoint_order::config::SolverConfig;
/// use waypoint_order::models::{CostMode, TourProblem};
/// use waypoint_order::local_search::two_opt;
///
/// // Corners of a unit square; order 0,2,1,3 crosses itself
/// let d = std::f64::consts::SQRT_2;
/// let problem = TourProblem::from_rows(
///     vec!["a".into(), "b".into(), "c".into(), "d".into()],
///     vec![
///         vec![0.0, 1.0, d, 1.0],
///         vec![1.0, 0.0, 1.0, d],
///         vec![d, 1.0, 0.0, 1.0],
///         vec![1.0, d, 1.0, 0.0],
///     ],
///     CostMode::Distance,
/// )
/// .expect("valid");
/// let tour = two_opt(&problem, Some(&[0, 2, 1, 3][..]), &SolverConfig::default()).expect("finite");
/// assert!((tour.total_cost() - 4.0).abs() < 1e-10);
/// assert!(tour.converged());
/// ```
pub fn two_opt(
    problem: &TourProblem,
    initial_order: Option<&[usize]>,
    config: &SolverConfig,
) -> Result<Tour> {
    let started = Instant::now();
    let n = problem.len();
    let evaluator = TourEvaluator::new(problem);

    let (mut order, algorithm) = match initial_order {
        Some(order) => {
            evaluator.validate_order(order)?;
            (order.to_vec(), Algorithm::TwoOptNn)
        }
        None => ((0..n).collect::<Vec<_>>(), Algorithm::TwoOpt),
    };

    let exact = match config.delta_mode {
        DeltaMode::Symmetric => false,
        DeltaMode::Exact => true,
        DeltaMode::Auto => !problem.matrix().is_symmetric(config.symmetry_tolerance),
    };

    let mut improved = true;
    let mut iteration_count = 0;
    let mut moves = 0;

    while improved && iteration_count < config.max_iterations {
        improved = false;
        iteration_count += 1;

        'scan: for i in 1..n.saturating_sub(1) {
            for k in (i + 1)..n {
                if i == 1 && k == n - 1 {
                    continue;
                }
                let delta = reversal_delta(problem, &order, i, k, exact)?;
                if delta < -config.epsilon {
                    order[i..=k].reverse();
                    improved = true;
                    moves += 1;
                    break 'scan;
                }
            }
        }
    }

    let converged = !improved;
    if !converged {
        log::warn!(
            "two_opt: reached max_iterations={} without convergence n={n}",
            config.max_iterations
        );
    }
    log::debug!("two_opt: done passes={iteration_count} moves={moves} exact_delta={exact}");

    let tour = evaluator
        .build_tour(algorithm, &order)?
        .with_iterations(iteration_count, converged);
    Ok(tour.with_compute_time(started.elapsed()))
}

/// Runs 2-opt seeded with the visit order of an existing tour.
///
/// The seed's compute time is added to the result so a chained
/// nearest-neighbor + 2-opt run reports its combined cost.
pub fn two_opt_from_tour(problem: &TourProblem, seed: &Tour, config: &SolverConfig) -> Result<Tour> {
    let order = seed.order();
    let tour = two_opt(problem, Some(order.as_slice()), config)?;
    let elapsed = tour.compute_time() + seed.compute_time();
    Ok(tour.with_compute_time(elapsed))
}

/// Cost change of reversing `order[i..=k]`.
fn reversal_delta(
    problem: &TourProblem,
    order: &[usize],
    i: usize,
    k: usize,
    exact: bool,
) -> Result<f64> {
    let n = order.len();
    let a = order[i - 1];
    let b = order[i];
    let c = order[k];
    let d = order[(k + 1) % n];

    let mut delta = problem.cost(a, c)? + problem.cost(b, d)?
        - (problem.cost(a, b)? + problem.cost(c, d)?);

    if exact {
        for t in i..k {
            let (u, v) = (order[t], order[t + 1]);
            delta += problem.cost(v, u)? - problem.cost(u, v)?;
        }
    }
    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;
    use crate::models::CostMode;

    fn problem(rows: Vec<Vec<f64>>) -> TourProblem {
        let ids = (0..rows.len()).map(|i| format!("w{i}")).collect();
        TourProblem::from_rows(ids, rows, CostMode::Distance).expect("valid")
    }

    /// Euclidean matrix over the given points.
    fn euclidean(points: &[(f64, f64)]) -> TourProblem {
        problem(
            points
                .iter()
                .map(|&(x1, y1)| {
                    points
                        .iter()
                        .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                        .collect()
                })
                .collect(),
        )
    }

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_2opt_uncrosses() {
        let p = euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let eval = TourEvaluator::new(&p);
        let initial = eval.order_cost(&[0, 2, 1, 3]).expect("finite");
        let tour = two_opt(&p, Some(&[0, 2, 1, 3][..]), &config()).expect("finite");
        assert!(tour.total_cost() < initial);
        assert!((tour.total_cost() - 4.0).abs() < 1e-10);
        assert_eq!(tour.algorithm(), Algorithm::TwoOptNn);
        assert_eq!(tour.order()[0], 0);
        assert!(eval.check_tour(&tour).is_empty());
    }

    #[test]
    fn test_2opt_identity_label() {
        let p = euclidean(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let tour = two_opt(&p, None, &config()).expect("finite");
        assert_eq!(tour.algorithm(), Algorithm::TwoOpt);
        assert_eq!(tour.order(), vec![0, 1, 2]);
        assert_eq!(tour.iteration_count(), Some(1));
    }

    #[test]
    fn test_2opt_already_optimal() {
        let p = euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let tour = two_opt(&p, None, &config()).expect("finite");
        assert_eq!(tour.order(), vec![0, 1, 2, 3]);
        assert_eq!(tour.iteration_count(), Some(1));
        assert!(tour.converged());
    }

    #[test]
    fn test_2opt_idempotent() {
        let p = euclidean(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 10.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (3.0, 7.0),
        ]);
        let first = two_opt(&p, None, &config()).expect("finite");
        let second = two_opt(&p, Some(first.order().as_slice()), &config()).expect("finite");
        assert_eq!(second.order(), first.order());
        assert_eq!(second.iteration_count(), Some(1));
        assert_eq!(second.total_cost(), first.total_cost());
    }

    #[test]
    fn test_2opt_single_waypoint() {
        let p = problem(vec![vec![0.0]]);
        let tour = two_opt(&p, None, &config()).expect("trivial");
        assert_eq!(tour.step_count(), 1);
        assert_eq!(tour.total_cost(), 0.0);
        assert_eq!(tour.iteration_count(), Some(1));
    }

    #[test]
    fn test_2opt_rejects_bad_order() {
        let inf = f64::INFINITY;
        // Every off-diagonal cell is broken, so any cost read would fail
        let p = problem(vec![vec![0.0, inf, inf], vec![inf, 0.0, inf], vec![inf, inf, 0.0]]);
        let bad_orders: [&[usize]; 4] = [&[0, 1], &[0, 1, 1], &[0, 1, 3], &[2, 1, 0]];
        for bad in bad_orders {
            assert!(matches!(
                two_opt(&p, Some(bad), &config()),
                Err(OptimizeError::InvalidOrder(_))
            ));
        }
    }

    #[test]
    fn test_2opt_invalid_cost() {
        let mut rows = vec![vec![1.0; 5]; 5];
        rows[0][2] = f64::NAN;
        let p = problem(rows);
        // The first candidate (i=1, k=2) reads cost(0, 2)
        assert!(matches!(
            two_opt(&p, None, &config()),
            Err(OptimizeError::InvalidCost { from: 0, to: 2 })
        ));
    }

    #[test]
    fn test_2opt_iteration_cap() {
        let p = euclidean(&[
            (0.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (4.0, 0.0),
            (2.0, 6.0),
            (6.0, 2.0),
        ]);
        let capped = two_opt(&p, None, &config().with_max_iterations(1)).expect("finite");
        assert_eq!(capped.iteration_count(), Some(1));
        assert!(!capped.converged());
        let eval = TourEvaluator::new(&p);
        assert!(eval.check_tour(&capped).is_empty());
        let identity = eval.order_cost(&[0, 1, 2, 3, 4, 5]).expect("finite");
        assert!(capped.total_cost() < identity);
    }

    #[test]
    fn test_2opt_epsilon_blocks_small_gains() {
        let p = euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let tour = two_opt(&p, Some(&[0, 2, 1, 3][..]), &config().with_epsilon(10.0)).expect("finite");
        assert_eq!(tour.order(), vec![0, 2, 1, 3]);
        assert!(tour.converged());
    }

    #[test]
    fn test_reversal_delta_exact_matches_recomputed_cost() {
        let p = problem(vec![
            vec![0.0, 1.0, 9.0, 4.0, 2.0],
            vec![7.0, 0.0, 3.0, 8.0, 5.0],
            vec![2.0, 6.0, 0.0, 1.0, 9.0],
            vec![5.0, 2.0, 7.0, 0.0, 3.0],
            vec![1.0, 8.0, 4.0, 6.0, 0.0],
        ]);
        let eval = TourEvaluator::new(&p);
        let order = vec![0, 1, 2, 3, 4];
        let before = eval.order_cost(&order).expect("finite");
        for i in 1..4 {
            for k in (i + 1)..5 {
                let mut after = order.clone();
                after[i..=k].reverse();
                let actual = eval.order_cost(&after).expect("finite") - before;
                let delta = reversal_delta(&p, &order, i, k, true).expect("finite");
                assert!((delta - actual).abs() < 1e-10, "i={i} k={k}");
            }
        }
    }

    #[test]
    fn test_2opt_asymmetric_never_worsens() {
        let p = problem(vec![
            vec![0.0, 1.0, 9.0, 4.0, 2.0],
            vec![7.0, 0.0, 3.0, 8.0, 5.0],
            vec![2.0, 6.0, 0.0, 1.0, 9.0],
            vec![5.0, 2.0, 7.0, 0.0, 3.0],
            vec![1.0, 8.0, 4.0, 6.0, 0.0],
        ]);
        let eval = TourEvaluator::new(&p);
        let initial = eval.order_cost(&[0, 1, 2, 3, 4]).expect("finite");
        let tour = two_opt(&p, None, &config()).expect("finite");
        assert!(tour.total_cost() <= initial + 1e-10);
    }

    #[test]
    fn test_from_tour_accumulates_time() {
        let p = euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let seed = TourEvaluator::new(&p)
            .build_tour(Algorithm::NearestNeighbour, &[0, 2, 1, 3])
            .expect("finite")
            .with_compute_time(std::time::Duration::from_secs(1));
        let tour = two_opt_from_tour(&p, &seed, &config()).expect("finite");
        assert!(tour.compute_time() >= std::time::Duration::from_secs(1));
        assert_eq!(tour.algorithm(), Algorithm::TwoOptNn);
        assert!((tour.total_cost() - 4.0).abs() < 1e-10);
    }
}
