use serde::{Deserialize, Serialize};

use crate::Trajectory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArmCommand {
    /// Move the TCP to a Cartesian target in the base frame.
    CartesianMove { x: f64, y: f64 },
    /// Return to the configured home position.
    Home,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub command_id: String,
    /// Milliseconds since Unix epoch
    pub timestamp: u64,
}

impl CommandMetadata {
    pub fn new() -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        }
    }
}

impl Default for CommandMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload emitted to plotting/rendering collaborators after each accepted
/// move. The collaborator replaces its whole dataset on every message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryMessage {
    pub trajectory: Trajectory,
    pub metadata: CommandMetadata,
}
