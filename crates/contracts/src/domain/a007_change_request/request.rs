use serde::{Deserialize, Serialize};

/// Payload of the approve/decline endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DecideChangeRequest {
    /// Reviewer note shown to the customer-care side.
    pub note: Option<String>,
}
