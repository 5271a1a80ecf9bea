use serde::{Deserialize, Serialize};

/// Status of a postpaid billing print run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingRunStatus {
    Queued,
    Rendering,
    Completed,
    Failed,
}

impl BillingRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingRunStatus::Queued => "Queued",
            BillingRunStatus::Rendering => "Rendering",
            BillingRunStatus::Completed => "Completed",
            BillingRunStatus::Failed => "Failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillingRunStatus::Queued => "Queued",
            BillingRunStatus::Rendering => "Rendering",
            BillingRunStatus::Completed => "Completed",
            BillingRunStatus::Failed => "Failed",
        }
    }

    pub fn all() -> Vec<BillingRunStatus> {
        vec![
            BillingRunStatus::Queued,
            BillingRunStatus::Rendering,
            BillingRunStatus::Completed,
            BillingRunStatus::Failed,
        ]
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Queued" => Some(BillingRunStatus::Queued),
            "Rendering" => Some(BillingRunStatus::Rendering),
            "Completed" => Some(BillingRunStatus::Completed),
            "Failed" => Some(BillingRunStatus::Failed),
            _ => None,
        }
    }

    /// A run still owned by the print pipeline; the list auto-refresh
    /// exists mostly for these.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, BillingRunStatus::Queued | BillingRunStatus::Rendering)
    }
}
