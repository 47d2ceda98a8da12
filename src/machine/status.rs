//! Status snapshot of a live machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Counters tracked by a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the machine was created
    pub created_at: DateTime<Utc>,

    /// Last committed transition, or creation time
    pub updated_at: DateTime<Utc>,

    /// Committed transitions
    pub transitions: usize,

    /// Transitions refused because no rule permitted them
    pub rejected: usize,

    /// Transitions aborted by a hook, handler or commit failure
    pub failed: usize,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            transitions: 0,
            rejected: 0,
            failed: 0,
        }
    }
}

/// Serializable view of a machine for structured logs and health reports.
///
/// Holds the state's name rather than the state itself, so state types need
/// not be serializable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineStatus {
    pub id: Uuid,
    pub state: String,
    pub metadata: MachineMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_metadata_has_no_activity() {
        let metadata = MachineMetadata::default();
        assert_eq!(metadata.created_at, metadata.updated_at);
        assert_eq!(metadata.transitions, 0);
        assert_eq!(metadata.rejected, 0);
        assert_eq!(metadata.failed, 0);
    }

    #[test]
    fn status_serializes_correctly() {
        let status = MachineStatus {
            id: Uuid::new_v4(),
            state: "Online".to_string(),
            metadata: MachineMetadata {
                transitions: 3,
                rejected: 1,
                ..MachineMetadata::default()
            },
        };

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: MachineStatus = serde_json::from_str(&json).unwrap();

        assert_eq!(status, deserialized);
        assert!(json.contains("\"state\":\"Online\""));
    }
}
