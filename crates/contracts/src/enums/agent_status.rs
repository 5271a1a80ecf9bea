use serde::{Deserialize, Serialize};

/// Lifecycle status of a field agent account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Active,
    Suspended,
    Deactivated,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Suspended => "Suspended",
            AgentStatus::Deactivated => "Deactivated",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Suspended => "Suspended",
            AgentStatus::Deactivated => "Deactivated",
        }
    }

    pub fn all() -> Vec<AgentStatus> {
        vec![
            AgentStatus::Active,
            AgentStatus::Suspended,
            AgentStatus::Deactivated,
        ]
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(AgentStatus::Active),
            "Suspended" => Some(AgentStatus::Suspended),
            "Deactivated" => Some(AgentStatus::Deactivated),
            _ => None,
        }
    }
}
