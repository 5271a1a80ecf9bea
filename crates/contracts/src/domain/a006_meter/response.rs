use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prepaid meter registered against a customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterResponse {
    pub id: Uuid,
    pub serial_number: String,
    pub account_number: String,
    pub customer_name: String,
    pub model: String,
    pub is_active: bool,
    pub installed_at: DateTime<Utc>,
}

/// Freshly generated test token. The client verifies the check digit
/// before presenting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTokenResponse {
    /// 20 decimal digits, check digit last.
    pub token: String,
    pub generated_at: DateTime<Utc>,
}
