use crate::enums::BillingRunStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One postpaid billing print run (a batch of rendered bills for a period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRunResponse {
    pub id: Uuid,
    /// Billing period the run covers, "YYYY-MM".
    pub billing_period: String,
    pub region: String,
    pub status: BillingRunStatus,
    pub total_bills: u32,
    /// Bills rendered so far; equals `total_bills` once completed.
    pub printed_bills: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
}
