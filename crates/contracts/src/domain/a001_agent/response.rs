use crate::enums::AgentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field agent as the backend exposes it to the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: Uuid,
    /// Short operator-facing code, e.g. "AG-0042".
    pub code: String,
    pub full_name: String,
    pub phone: String,
    pub region: String,
    pub status: AgentStatus,
    /// Float balance in the agent wallet; display-only on this side.
    pub wallet_balance: f64,
    pub meters_assigned: u32,
    pub created_at: DateTime<Utc>,
}
