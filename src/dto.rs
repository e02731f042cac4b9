use serde::{Deserialize, Serialize};

/// Inbound send request. Fields default to empty so that an absent field
/// and an empty one are rejected the same way during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMailRequest {
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
}
