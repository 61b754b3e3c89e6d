//! Directed tour step.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::CostMode;

/// One directed edge used by a tour (or available in a problem).
///
/// `cost` is the matrix value at `[source_index][destination_index]`,
/// measured in `mode` units.
///
/// # Examples
///
/// ```
/// use waypoint_order::models::{CostMode, Step};
///
/// let step = Step::new(0, 1, "A", "B", 573.0, CostMode::Duration);
/// let json = serde_json::to_value(&step).expect("serializable");
/// assert_eq!(json["duration"], 573.0);
/// assert!(json.get("distance").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Matrix index of the origin.
    pub source_index: usize,
    /// Matrix index of the destination.
    pub destination_index: usize,
    /// External id of the origin.
    pub source_id: String,
    /// External id of the destination.
    pub destination_id: String,
    /// Edge cost.
    pub cost: f64,
    /// Unit of `cost`.
    pub mode: CostMode,
}

impl Step {
    /// Creates a new step.
    pub fn new(
        source_index: usize,
        destination_index: usize,
        source_id: impl Into<String>,
        destination_id: impl Into<String>,
        cost: f64,
        mode: CostMode,
    ) -> Self {
        Self {
            source_index,
            destination_index,
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            cost,
            mode,
        }
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Step", 5)?;
        s.serialize_field("source_waypoint_idx", &self.source_index)?;
        s.serialize_field("destination_waypoint_idx", &self.destination_index)?;
        s.serialize_field("source_id", &self.source_id)?;
        s.serialize_field("destination_id", &self.destination_id)?;
        s.serialize_field(self.mode.step_field(), &self.cost)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_distance_step() {
        let step = Step::new(2, 0, "C", "A", 1169.5, CostMode::Distance);
        let json = serde_json::to_value(&step).expect("serializable");
        assert_eq!(json["source_waypoint_idx"], 2);
        assert_eq!(json["destination_waypoint_idx"], 0);
        assert_eq!(json["source_id"], "C");
        assert_eq!(json["destination_id"], "A");
        assert_eq!(json["distance"], 1169.5);
        assert!(json.get("duration").is_none());
    }
}
