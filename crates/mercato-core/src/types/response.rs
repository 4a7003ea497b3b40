//! The uniform JSON body every HTTP response conforms to.

use serde::{Deserialize, Serialize};

/// The response envelope.
///
/// Success responses carry `message` and `data`; failures carry `error`
/// and either `message` or `messages`. The shape is shared so both the
/// success path and the exception handler chain emit through one type,
/// and so tests can deserialize any response uniformly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseBody {
    /// HTTP status code repeated in the body.
    pub status_code: u16,
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable message for single-message responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Per-field messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
    /// Error category name, present on failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response payload, present on successes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
