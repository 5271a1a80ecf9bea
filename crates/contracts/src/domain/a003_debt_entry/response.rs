use crate::enums::DebtEntryStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Debt ledger entry of one customer account for one billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtEntryResponse {
    pub id: Uuid,
    pub account_number: String,
    pub customer_name: String,
    pub billing_period_id: String,
    pub amount_due: f64,
    pub status: DebtEntryStatus,
    pub due_date: NaiveDate,
    pub days_overdue: i64,
}
