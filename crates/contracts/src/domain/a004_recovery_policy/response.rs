use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Debt recovery policy: how much of each prepayment is withheld against
/// outstanding debt. A small administered table, hence numeric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPolicyResponse {
    pub id: i64,
    pub name: String,
    /// Server-side strategy identifier, e.g. "percentage", "fixed-step".
    pub strategy: String,
    pub deduction_percent: f64,
    pub accounts_attached: u32,
    pub is_paused: bool,
    pub updated_at: DateTime<Utc>,
}
