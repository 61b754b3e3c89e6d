//! Tour result type.

use std::fmt;
use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

use super::{CostMode, Step};

/// The algorithm that produced a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
pub enum Algorithm {
    /// Exhaustive search over all circuits.
    #[serde(rename = "bruteForce")]
    BruteForce,
    /// Greedy nearest-neighbor construction.
    #[serde(rename = "nearestNeighbour")]
    NearestNeighbour,
    /// 2-opt from the identity order.
    #[serde(rename = "twoOpt")]
    TwoOpt,
    /// 2-opt from a supplied order (usually nearest-neighbor output).
    #[serde(rename = "twoOptNN")]
    TwoOptNn,
}

impl Algorithm {
    /// Name used in responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BruteForce => "bruteForce",
            Self::NearestNeighbour => "nearestNeighbour",
            Self::TwoOpt => "twoOpt",
            Self::TwoOptNn => "twoOptNN",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed tour that starts and ends at waypoint 0.
///
/// Holds one [`Step`] per waypoint; the last step returns to the start.
/// Local search tours additionally carry the number of passes run and
/// whether the search converged before the iteration cap.
///
/// # Examples
///
/// ```
/// use waypoint_order::models::{Algorithm, CostMode, Step, Tour};
///
/// let tour = Tour::new(
///     Algorithm::NearestNeighbour,
///     vec![
///         Step::new(0, 1, "A", "B", 3.0, CostMode::Distance),
///         Step::new(1, 0, "B", "A", 4.0, CostMode::Distance),
///     ],
///     CostMode::Distance,
/// );
/// assert_eq!(tour.step_count(), 2);
/// assert_eq!(tour.total_cost(), 7.0);
/// assert_eq!(tour.order(), vec![0, 1]);
/// assert_eq!(tour.stops(), vec!["A", "B", "A"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    algorithm: Algorithm,
    steps: Vec<Step>,
    total_cost: f64,
    mode: CostMode,
    compute_time: Duration,
    iteration_count: Option<usize>,
    converged: bool,
}

impl Tour {
    /// Creates a tour from its steps; the total is the sum of step costs.
    pub fn new(algorithm: Algorithm, steps: Vec<Step>, mode: CostMode) -> Self {
        let total_cost = steps.iter().map(|s| s.cost).sum();
        Self {
            algorithm,
            steps,
            total_cost,
            mode,
            compute_time: Duration::ZERO,
            iteration_count: None,
            converged: true,
        }
    }

    /// Sets the measured compute time.
    pub fn with_compute_time(mut self, elapsed: Duration) -> Self {
        self.compute_time = elapsed;
        self
    }

    /// Records local search pass count and convergence.
    pub fn with_iterations(mut self, iteration_count: usize, converged: bool) -> Self {
        self.iteration_count = Some(iteration_count);
        self.converged = converged;
        self
    }

    /// Algorithm that produced this tour.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Ordered steps, closing back at the start.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps (equals the number of waypoints).
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Sum of step costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Unit of the costs.
    pub fn mode(&self) -> CostMode {
        self.mode
    }

    /// Wall time spent computing this tour (including any seed tour).
    pub fn compute_time(&self) -> Duration {
        self.compute_time
    }

    /// Number of 2-opt passes, `None` for other algorithms.
    pub fn iteration_count(&self) -> Option<usize> {
        self.iteration_count
    }

    /// `false` only when local search stopped at its iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Waypoint indices in visit order, starting with 0.
    pub fn order(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.source_index).collect()
    }

    /// Waypoint ids in visit order, with the start appended at the end.
    pub fn stops(&self) -> Vec<&str> {
        let mut stops: Vec<&str> = self.steps.iter().map(|s| s.source_id.as_str()).collect();
        if let Some(last) = self.steps.last() {
            stops.push(last.destination_id.as_str());
        }
        stops
    }

    /// Total cost in human-readable units.
    pub fn display_total(&self) -> String {
        self.mode.format(self.total_cost)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.algorithm,
            self.stops().join(" -> "),
            self.display_total()
        )
    }
}

impl Serialize for Tour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.iteration_count.is_some() { 7 } else { 5 };
        let mut s = serializer.serialize_struct("Tour", fields)?;
        s.serialize_field("algorithm", &self.algorithm)?;
        s.serialize_field(
            "computeTime",
            &format!("{:.3} ms", self.compute_time.as_secs_f64() * 1000.0),
        )?;
        s.serialize_field("stepCount", &self.step_count())?;
        if let Some(count) = self.iteration_count {
            s.serialize_field("iterationCount", &count)?;
            s.serialize_field("converged", &self.converged)?;
        }
        s.serialize_field("steps", &self.steps)?;
        s.serialize_field(self.mode.total_field(), &self.total_cost)?;
        s.end()
    }
}
