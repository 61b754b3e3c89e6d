//! Ordering strategies.

use serde::{Deserialize, Serialize};

/// Which ordering algorithm(s) a [`Planner`](super::Planner) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Exhaustive search; rejected above the brute-force limit.
    #[serde(rename = "bruteForce")]
    BruteForce,
    /// Nearest-neighbor construction only.
    #[serde(rename = "nearestNeighbour")]
    NearestNeighbour,
    /// 2-opt from the identity order.
    #[serde(rename = "twoOpt")]
    TwoOpt,
    /// Nearest-neighbor seed improved by 2-opt.
    #[serde(rename = "twoOptNN")]
    TwoOptNn,
    /// Every algorithm; brute force only within the limit.
    #[serde(rename = "all")]
    All,
    /// Brute force within the limit, otherwise nearest neighbor + 2-opt.
    #[default]
    #[serde(rename = "auto")]
    Auto,
}
