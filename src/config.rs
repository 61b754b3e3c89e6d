//! Solver configuration.

use serde::{Deserialize, Serialize};

/// How 2-opt prices a segment reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeltaMode {
    /// Four-endpoint formula. Exact only for symmetric matrices.
    Symmetric,
    /// Four endpoints plus the direction change of every reversed edge.
    Exact,
    /// `Exact` for asymmetric matrices, `Symmetric` otherwise.
    #[default]
    Auto,
}

/// Tuning knobs shared by all ordering algorithms.
///
/// # Examples
///
/// ```
/// use waypoint_order::config::{DeltaMode, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_max_iterations(50)
///     .with_delta_mode(DeltaMode::Exact);
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.brute_force_limit, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverConfig {
    /// Maximum number of 2-opt passes.
    pub max_iterations: usize,
    /// A 2-opt move is applied only when its delta is below `-epsilon`.
    pub epsilon: f64,
    /// Largest N the planner hands to exhaustive search.
    pub brute_force_limit: usize,
    /// Reversal pricing used by 2-opt.
    pub delta_mode: DeltaMode,
    /// Tolerance used to decide symmetry under [`DeltaMode::Auto`].
    pub symmetry_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-12,
            brute_force_limit: 9,
            delta_mode: DeltaMode::Auto,
            symmetry_tolerance: 1e-9,
        }
    }
}

impl SolverConfig {
    /// Sets the 2-opt pass cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the improvement threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the largest N eligible for exhaustive search.
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = limit;
        self
    }

    /// Sets the 2-opt delta mode.
    pub fn with_delta_mode(mut self, mode: DeltaMode) -> Self {
        self.delta_mode = mode;
        self
    }

    /// Sets the symmetry tolerance.
    pub fn with_symmetry_tolerance(mut self, tol: f64) -> Self {
        self.symmetry_tolerance = tol;
        self
    }
}
