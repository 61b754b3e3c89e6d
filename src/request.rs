//! JSON request boundary.
//!
//! An HTTP layer deserializes the body into [`OptimizeRequest`], calls
//! [`solve`], and serializes the returned tours. Missing matrix cells may
//! be sent as `null`; they become untraversable edges.

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::Result;
use crate::models::{CostMode, Tour, TourProblem};
use crate::planner::{Planner, Strategy};

/// A single ordering request.
///
/// # Examples
///
/// ```
/// use waypoint_order::config::SolverConfig;
/// use waypoint_order::request::{solve, OptimizeRequest};
///
/// let body = r#"{
///     "waypointIds": ["A", "B", "C"],
///     "matrix": [[0, 573, 1169.5], [573, 0, 597], [1169.5, 597, 0]],
///     "mode": "duration",
///     "strategy": "twoOptNN"
/// }"#;
/// let request = OptimizeRequest::from_json(body).expect("well-formed");
/// let tours = solve(request, &SolverConfig::default()).expect("connected");
/// assert_eq!(tours[0].total_cost(), 2339.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// Waypoint ids in matrix order; index 0 is the start.
    pub waypoint_ids: Vec<String>,
    /// Row-major cost matrix, `null` for missing cells.
    pub matrix: Vec<Vec<Option<f64>>>,
    /// What the matrix measures.
    #[serde(default)]
    pub mode: CostMode,
    /// Visit order to improve with 2-opt; overrides `strategy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_order: Option<Vec<usize>>,
    /// Which algorithms to run; defaults to [`Strategy::Auto`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
}

impl OptimizeRequest {
    /// Parses a request body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Validates the shape and builds the problem instance.
    pub fn into_problem(self) -> Result<TourProblem> {
        let rows = self
            .matrix
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.unwrap_or(f64::NAN)).collect())
            .collect();
        Ok(TourProblem::from_rows(self.waypoint_ids, rows, self.mode)?)
    }
}

/// Runs a request end to end.
///
/// With an `initial_order` the result is a single `twoOptNN` tour improved
/// from that order. Otherwise the requested strategy runs.
pub fn solve(request: OptimizeRequest, config: &SolverConfig) -> Result<Vec<Tour>> {
    let initial_order = request.initial_order.clone();
    let strategy = request.strategy.unwrap_or_default();
    let problem = request.into_problem()?;
    let planner = Planner::new(config.clone());

    log::debug!(
        "request: n={} mode={:?} strategy={:?} seeded={}",
        problem.len(),
        problem.mode(),
        strategy,
        initial_order.is_some()
    );

    match initial_order {
        Some(order) => Ok(vec![planner.improve(&problem, &order)?]),
        None => planner.run(&problem, strategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OptimizeError, ValidationError};
    use crate::models::Algorithm;

    const SCENARIO: &str = r#"{
        "waypointIds": ["A", "B", "C"],
        "matrix": [[0, 573, 1169.5], [573, 0, 597], [1169.5, 597, 0]]
    }"#;

    #[test]
    fn test_parse_defaults() {
        let req = OptimizeRequest::from_json(SCENARIO).expect("well-formed");
        assert_eq!(req.waypoint_ids, vec!["A", "B", "C"]);
        assert_eq!(req.mode, CostMode::Distance);
        assert_eq!(req.strategy, None);
        assert_eq!(req.initial_order, None);
        assert_eq!(req.matrix[0][2], Some(1169.5));
    }

    #[test]
    fn test_malformed_body() {
        let err = OptimizeRequest::from_json("{\"waypointIds\": [").unwrap_err();
        assert!(matches!(err, OptimizeError::Json(_)));
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_null_cells_are_untraversable() {
        let req = OptimizeRequest::from_json(
            r#"{"waypointIds": ["a", "b"], "matrix": [[0, null], [1, 0]]}"#,
        )
        .expect("well-formed");
        let problem = req.into_problem().expect("valid shape");
        assert!(!problem.matrix().is_traversable(0, 1));
        assert!(problem.matrix().is_traversable(1, 0));
    }

    #[test]
    fn test_shape_errors_surface() {
        let req = OptimizeRequest::from_json(
            r#"{"waypointIds": ["a", "b"], "matrix": [[0, 1]]}"#,
        )
        .expect("well-formed");
        let err = req.into_problem().unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Validation(ValidationError::RowCount {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_solve_auto_scenario() {
        let req = OptimizeRequest::from_json(SCENARIO).expect("well-formed");
        let tours = solve(req, &SolverConfig::default()).expect("connected");
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].algorithm(), Algorithm::BruteForce);
        assert!((tours[0].total_cost() - 2339.5).abs() < 1e-9);
    }

    #[test]
    fn test_solve_with_initial_order() {
        let mut req = OptimizeRequest::from_json(SCENARIO).expect("well-formed");
        req.initial_order = Some(vec![0, 2, 1]);
        req.strategy = Some(Strategy::All);
        let tours = solve(req, &SolverConfig::default()).expect("connected");
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].algorithm(), Algorithm::TwoOptNn);
    }

    #[test]
    fn test_solve_rejects_bad_initial_order() {
        let mut req = OptimizeRequest::from_json(SCENARIO).expect("well-formed");
        req.initial_order = Some(vec![2, 0, 1]);
        let err = solve(req, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidOrder(_)));
    }

    #[test]
    fn test_response_shape() {
        let mut req = OptimizeRequest::from_json(SCENARIO).expect("well-formed");
        req.mode = CostMode::Duration;
        req.strategy = Some(Strategy::All);
        let tours = solve(req, &SolverConfig::default()).expect("connected");
        let json = serde_json::to_value(&tours).expect("serializable");

        assert_eq!(json[0]["algorithm"], "bruteForce");
        assert_eq!(json[3]["algorithm"], "twoOptNN");
        assert_eq!(json[3]["stepCount"], 3);
        assert!(json[3]["iterationCount"].is_u64());
        assert!(json[0].get("iterationCount").is_none());
        assert_eq!(json[0]["steps"][0]["source_id"], "A");
        assert!(json[0]["steps"][0]["duration"].is_number());
        assert!(json[0]["totalDuration"].is_number());
        assert!(json[0]["computeTime"]
            .as_str()
            .is_some_and(|s| s.ends_with(" ms")));
    }
}
