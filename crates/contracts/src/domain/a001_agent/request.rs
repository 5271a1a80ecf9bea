use crate::enums::AgentStatus;
use serde::{Deserialize, Serialize};

/// Payload of the status transition endpoint (deactivate / reactivate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAgentStatusRequest {
    pub status: AgentStatus,
    /// Free-form audit note; the backend stores it on the agent history.
    pub reason: Option<String>,
}
