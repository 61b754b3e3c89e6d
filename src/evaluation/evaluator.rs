//! Tour evaluator that turns visit orders into priced, checked tours.

use std::fmt;

use crate::error::{OptimizeError, Result};
use crate::models::{Algorithm, Tour, TourProblem};

/// A way in which a tour breaks the closed-circuit invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum TourViolation {
    /// The tour does not have one step per waypoint.
    WrongLength {
        /// Waypoint count.
        expected: usize,
        /// Steps present.
        actual: usize,
    },
    /// The first step does not leave waypoint 0.
    WrongStart {
        /// Actual first source.
        found: usize,
    },
    /// A step does not depart from where the previous one arrived.
    BrokenChain {
        /// Step position.
        position: usize,
    },
    /// A waypoint is departed from more than once.
    RepeatedWaypoint {
        /// Waypoint index.
        index: usize,
    },
    /// The last step does not return to waypoint 0.
    NotClosed {
        /// Actual final destination.
        found: usize,
    },
}

impl fmt::Display for TourViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} steps, found {actual}")
            }
            Self::WrongStart { found } => write!(f, "tour starts at {found}, not 0"),
            Self::BrokenChain { position } => write!(f, "step {position} does not continue the tour"),
            Self::RepeatedWaypoint { index } => write!(f, "waypoint {index} visited twice"),
            Self::NotClosed { found } => write!(f, "tour ends at {found}, not 0"),
        }
    }
}

/// Prices visit orders against a problem and assembles [`Tour`] results.
///
/// # Examples
///
/// ```
/// use waypoint_order::models::{Algorithm, CostMode, TourProblem};
/// use waypoint_order::evaluation::TourEvaluator;
///
/// let problem = TourProblem::from_rows(
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0], vec![2.0, 3.0, 0.0]],
///     CostMode::Distance,
/// )
/// .expect("valid");
/// let eval = TourEvaluator::new(&problem);
/// let tour = eval.build_tour(Algorithm::TwoOpt, &[0, 1, 2]).expect("finite costs");
/// assert_eq!(tour.total_cost(), 6.0);
/// assert!(eval.check_tour(&tour).is_empty());
/// ```
pub struct TourEvaluator<'a> {
    problem: &'a TourProblem,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given problem.
    pub fn new(problem: &'a TourProblem) -> Self {
        Self { problem }
    }

    /// Checks that `order` is a permutation of `0..n` beginning with 0.
    pub fn validate_order(&self, order: &[usize]) -> Result<()> {
        let n = self.problem.len();
        if order.len() != n {
            return Err(OptimizeError::invalid_order(format!(
                "expected {n} indices, got {}",
                order.len()
            )));
        }
        let mut seen = vec![false; n];
        for &idx in order {
            if idx >= n {
                return Err(OptimizeError::invalid_order(format!(
                    "index {idx} out of range for {n} waypoints"
                )));
            }
            if seen[idx] {
                return Err(OptimizeError::invalid_order(format!("index {idx} repeated")));
            }
            seen[idx] = true;
        }
        if order[0] != 0 {
            return Err(OptimizeError::invalid_order(format!(
                "order must start at waypoint 0, starts at {}",
                order[0]
            )));
        }
        Ok(())
    }

    /// Checked cost of the closed circuit `order[0] → … → order[n-1] → order[0]`.
    pub fn order_cost(&self, order: &[usize]) -> Result<f64> {
        if order.len() < 2 {
            return Ok(0.0);
        }
        let n = order.len();
        (0..n).try_fold(0.0, |acc, t| {
            Ok(acc + self.problem.cost(order[t], order[(t + 1) % n])?)
        })
    }

    /// Builds a closed tour from a visit order.
    ///
    /// A single-waypoint order yields one trivial 0→0 step of cost 0; the
    /// diagonal is never read.
    pub fn build_tour(&self, algorithm: Algorithm, order: &[usize]) -> Result<Tour> {
        let n = order.len();
        let mut steps = Vec::with_capacity(n);
        if n == 1 {
            steps.push(self.problem.step(order[0], order[0], 0.0));
        } else {
            for t in 0..n {
                let (src, dst) = (order[t], order[(t + 1) % n]);
                steps.push(self.problem.step(src, dst, self.problem.cost(src, dst)?));
            }
        }
        Ok(Tour::new(algorithm, steps, self.problem.mode()))
    }

    /// Returns every closed-circuit violation in `tour`; empty means valid.
    pub fn check_tour(&self, tour: &Tour) -> Vec<TourViolation> {
        let n = self.problem.len();
        let steps = tour.steps();
        let mut violations = Vec::new();

        if steps.len() != n {
            violations.push(TourViolation::WrongLength {
                expected: n,
                actual: steps.len(),
            });
            return violations;
        }
        if steps[0].source_index != 0 {
            violations.push(TourViolation::WrongStart {
                found: steps[0].source_index,
            });
        }

        let mut seen = vec![false; n];
        for (pos, step) in steps.iter().enumerate() {
            if pos > 0 && steps[pos - 1].destination_index != step.source_index {
                violations.push(TourViolation::BrokenChain { position: pos });
            }
            match seen.get_mut(step.source_index) {
                Some(flag) if *flag => violations.push(TourViolation::RepeatedWaypoint {
                    index: step.source_index,
                }),
                Some(flag) => *flag = true,
                None => violations.push(TourViolation::BrokenChain { position: pos }),
            }
        }

        let last = steps[n - 1].destination_index;
        if last != 0 {
            violations.push(TourViolation::NotClosed { found: last });
        }
        violations
    }
}

/// Returns the cheapest tour; the earliest one wins on equal cost.
pub fn best_tour(tours: &[Tour]) -> Option<&Tour> {
    tours.iter().reduce(|best, t| {
        if t.total_cost() < best.total_cost() {
            t
        } else {
            best
        }
    })
}
