use serde::{Deserialize, Serialize};

/// Generic reply of mutation endpoints: success is carried by the HTTP
/// status, the body optionally adds a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiMessage {
    pub message: Option<String>,
}

/// Reply of export endpoints that produce an artifact server-side and hand
/// back a short-lived link for the browser to download.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRef {
    pub download_url: String,
    pub file_name: String,
}
