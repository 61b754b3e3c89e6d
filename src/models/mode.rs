//! Cost mode tag.

use serde::{Deserialize, Serialize};

use crate::format::{format_hms, format_kilometers};

/// What the matrix cells measure.
///
/// Carried on every step and tour so the serialized field names follow
/// the request (`distance` / `totalDistance` or `duration` / `totalDuration`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    /// Meters.
    #[default]
    Distance,
    /// Seconds.
    Duration,
}

impl CostMode {
    /// Field name used for a single step's cost.
    pub fn step_field(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
        }
    }

    /// Field name used for a tour's total cost.
    pub fn total_field(self) -> &'static str {
        match self {
            Self::Distance => "totalDistance",
            Self::Duration => "totalDuration",
        }
    }

    /// Renders a cost in this mode's unit (kilometers or `HH:MM:SS`).
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Distance => format_kilometers(value),
            Self::Duration => format_hms(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        assert_eq!(CostMode::Distance.step_field(), "distance");
        assert_eq!(CostMode::Duration.total_field(), "totalDuration");
    }

    #[test]
    fn test_format() {
        assert_eq!(CostMode::Distance.format(2500.0), "2.50 km");
        assert_eq!(CostMode::Duration.format(90.0), "00:01:30");
    }

    #[test]
    fn test_serde_lowercase() {
        let mode: CostMode = serde_json::from_str("\"duration\"").expect("valid");
        assert_eq!(mode, CostMode::Duration);
        assert_eq!(
            serde_json::to_string(&CostMode::Distance).expect("serializable"),
            "\"distance\""
        );
    }
}
