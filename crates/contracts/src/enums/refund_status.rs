use serde::{Deserialize, Serialize};

/// Processing status of a customer refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefundStatus {
    Requested,
    Processing,
    Paid,
    Rejected,
}

impl RefundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundStatus::Requested => "Requested",
            RefundStatus::Processing => "Processing",
            RefundStatus::Paid => "Paid",
            RefundStatus::Rejected => "Rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.as_str()
    }

    pub fn all() -> Vec<RefundStatus> {
        vec![
            RefundStatus::Requested,
            RefundStatus::Processing,
            RefundStatus::Paid,
            RefundStatus::Rejected,
        ]
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Requested" => Some(RefundStatus::Requested),
            "Processing" => Some(RefundStatus::Processing),
            "Paid" => Some(RefundStatus::Paid),
            "Rejected" => Some(RefundStatus::Rejected),
            _ => None,
        }
    }
}
