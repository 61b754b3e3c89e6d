//! Strategy runner.

use crate::config::SolverConfig;
use crate::constructive::nearest_neighbor;
use crate::error::{OptimizeError, Result, ValidationError};
use crate::evaluation::{best_tour, TourEvaluator};
use crate::exact::brute_force;
use crate::local_search::{two_opt, two_opt_from_tour};
use crate::models::{Tour, TourProblem};

use super::Strategy;

/// Runs ordering strategies with a shared configuration.
///
/// # Examples
///
/// ```
/// use waypoint_order::config::SolverConfig;
/// use waypoint_order::models::{Algorithm, CostMode, TourProblem};
/// use waypoint_order::planner::{Planner, Strategy};
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
///
/// let planner = Planner::new(SolverConfig::default());
/// let tours = planner.run(&problem, Strategy::All).expect("connected");
/// assert_eq!(tours.len(), 4);
///
/// let best = planner.best(&problem, Strategy::Auto).expect("connected");
/// assert_eq!(best.algorithm(), Algorithm::BruteForce);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: SolverConfig,
}

impl Planner {
    /// Creates a planner with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs `strategy` and returns every tour it produced.
    ///
    /// [`Strategy::All`] yields, in order: brute force (only when n is within
    /// the brute-force limit), 2-opt from identity, nearest neighbor, and
    /// 2-opt seeded with the nearest-neighbor tour.
    pub fn run(&self, problem: &TourProblem, strategy: Strategy) -> Result<Vec<Tour>> {
        let n = problem.len();
        let exact_ok = n <= self.config.brute_force_limit;

        let tours = match strategy {
            Strategy::BruteForce => {
                if !exact_ok {
                    return Err(ValidationError::TooManyWaypoints {
                        count: n,
                        limit: self.config.brute_force_limit,
                    }
                    .into());
                }
                vec![brute_force(problem)?]
            }
            Strategy::NearestNeighbour => vec![nearest_neighbor(problem)?],
            Strategy::TwoOpt => vec![two_opt(problem, None, &self.config)?],
            Strategy::TwoOptNn => vec![self.chained(problem)?],
            Strategy::Auto if exact_ok => vec![brute_force(problem)?],
            Strategy::Auto => vec![self.chained(problem)?],
            Strategy::All => {
                let mut tours = Vec::with_capacity(4);
                if exact_ok {
                    tours.push(brute_force(problem)?);
                }
                tours.push(two_opt(problem, None, &self.config)?);
                let seed = nearest_neighbor(problem)?;
                let improved = two_opt_from_tour(problem, &seed, &self.config)?;
                tours.push(seed);
                tours.push(improved);
                tours
            }
        };

        let evaluator = TourEvaluator::new(problem);
        for tour in &tours {
            debug_assert!(evaluator.check_tour(tour).is_empty());
            log::info!(
                "planner: algorithm={} n={n} total={:.3} compute_time={:?}",
                tour.algorithm(),
                tour.total_cost(),
                tour.compute_time()
            );
        }
        Ok(tours)
    }

    /// Runs `strategy` and returns the cheapest tour (earliest on ties).
    pub fn best(&self, problem: &TourProblem, strategy: Strategy) -> Result<Tour> {
        let tours = self.run(problem, strategy)?;
        best_tour(&tours).cloned().ok_or(OptimizeError::NoFeasibleTour)
    }

    /// Runs 2-opt from a caller-supplied visit order.
    pub fn improve(&self, problem: &TourProblem, initial_order: &[usize]) -> Result<Tour> {
        two_opt(problem, Some(initial_order), &self.config)
    }

    fn chained(&self, problem: &TourProblem) -> Result<Tour> {
        let seed = nearest_neighbor(problem)?;
        two_opt_from_tour(problem, &seed, &self.config)
    }
}
