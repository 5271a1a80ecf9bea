use serde::{Deserialize, Serialize};

/// Recovery status of a debt ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtEntryStatus {
    Pending,
    Approved,
    InRecovery,
    Settled,
    WrittenOff,
}

impl DebtEntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtEntryStatus::Pending => "Pending",
            DebtEntryStatus::Approved => "Approved",
            DebtEntryStatus::InRecovery => "InRecovery",
            DebtEntryStatus::Settled => "Settled",
            DebtEntryStatus::WrittenOff => "WrittenOff",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DebtEntryStatus::Pending => "Pending",
            DebtEntryStatus::Approved => "Approved",
            DebtEntryStatus::InRecovery => "In recovery",
            DebtEntryStatus::Settled => "Settled",
            DebtEntryStatus::WrittenOff => "Written off",
        }
    }

    pub fn all() -> Vec<DebtEntryStatus> {
        vec![
            DebtEntryStatus::Pending,
            DebtEntryStatus::Approved,
            DebtEntryStatus::InRecovery,
            DebtEntryStatus::Settled,
            DebtEntryStatus::WrittenOff,
        ]
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(DebtEntryStatus::Pending),
            "Approved" => Some(DebtEntryStatus::Approved),
            "InRecovery" => Some(DebtEntryStatus::InRecovery),
            "Settled" => Some(DebtEntryStatus::Settled),
            "WrittenOff" => Some(DebtEntryStatus::WrittenOff),
            _ => None,
        }
    }
}
