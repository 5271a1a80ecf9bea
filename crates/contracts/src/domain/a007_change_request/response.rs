use crate::enums::ChangeRequestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing change request raised for a customer account (tariff change,
/// plan migration, billing address correction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestResponse {
    pub id: Uuid,
    pub account_number: String,
    pub customer_name: String,
    /// What is being changed, e.g. "TariffPlan".
    pub change_kind: String,
    pub current_value: String,
    pub requested_value: String,
    pub reason: Option<String>,
    pub status: ChangeRequestStatus,
    pub submitted_at: DateTime<Utc>,
}
