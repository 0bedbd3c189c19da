//! The externally visible state projection and its JSON codec.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::agent::{AgentState, Percept};
use super::types::{Action, StepCount};
use super::world_model::EnvironmentState;

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only projection handed to rendering layers. The shape is a stable
/// contract: field names and enum wire forms are consumed verbatim.
/// Recomputed on every request; never mutated by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub step_count: StepCount,
    pub environment: EnvironmentState,
    pub agent: AgentState,
    /// `null` until the first step of a session.
    pub last_perception: Option<Percept>,
    /// Action label, or `"none"` until the first step.
    #[serde(
        serialize_with = "serialize_last_action",
        deserialize_with = "deserialize_last_action"
    )]
    pub last_action: Option<Action>,
    /// `1 - dirty_now / initial_dirty_count`, in `[0, 1]`.
    pub progress: f64,
    /// True once no dirt remains.
    pub done: bool,
}

impl SimulationSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(input)?)
    }
}

fn serialize_last_action<S>(action: &Option<Action>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match action {
        Some(action) => action.serialize(serializer),
        None => serializer.serialize_str("none"),
    }
}

fn deserialize_last_action<'de, D>(deserializer: D) -> Result<Option<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    if label == "none" {
        return Ok(None);
    }
    Action::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(&label)).map(Some)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    Serde(String),
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Serde(err.to_string())
    }
}
