use serde::{Deserialize, Serialize};

/// Review status of a billing change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeRequestStatus {
    Pending,
    Approved,
    Declined,
}

impl ChangeRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeRequestStatus::Pending => "Pending",
            ChangeRequestStatus::Approved => "Approved",
            ChangeRequestStatus::Declined => "Declined",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.as_str()
    }

    pub fn all() -> Vec<ChangeRequestStatus> {
        vec![
            ChangeRequestStatus::Pending,
            ChangeRequestStatus::Approved,
            ChangeRequestStatus::Declined,
        ]
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(ChangeRequestStatus::Pending),
            "Approved" => Some(ChangeRequestStatus::Approved),
            "Declined" => Some(ChangeRequestStatus::Declined),
            _ => None,
        }
    }

    /// Only pending requests may be decided.
    pub fn is_decidable(&self) -> bool {
        matches!(self, ChangeRequestStatus::Pending)
    }
}
