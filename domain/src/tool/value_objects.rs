//! Tool domain value objects

use serde::{Deserialize, Serialize};

/// Canonical result of one tool call.
///
/// Exactly one of `result` / `error` is populated, selected by `success`.
/// Construct through [`ToolResult::success`] and [`ToolResult::failure`] so
/// the invariant cannot be broken. Deserialization enforces the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawToolResult")]
pub struct ToolResult {
    /// Whether the call succeeded
    success: bool,
    /// Payload (structured document or trimmed text) on success
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    /// Error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(result: impl Into<serde_json::Value>) -> Self {
        Self {
            success: true,
            result: Some(result.into()),
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }

    /// Check if the call was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the payload
    pub fn result(&self) -> Option<&serde_json::Value> {
        self.result.as_ref()
    }

    /// Get the error message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Human-readable body: text payloads verbatim, structured payloads
    /// pretty-printed, errors as their message.
    pub fn body_text(&self) -> String {
        match (&self.result, &self.error) {
            (Some(serde_json::Value::String(text)), _) => text.clone(),
            (Some(serde_json::Value::Null), _) => String::new(),
            (Some(value), _) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawToolResult {
    success: bool,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawToolResult> for ToolResult {
    type Error = String;

    fn try_from(raw: RawToolResult) -> Result<Self, Self::Error> {
        match (raw.success, raw.result, raw.error) {
            // A null payload reads back as an absent one.
            (true, result, None) => Ok(Self::success(result.unwrap_or_default())),
            (false, None, Some(error)) => Ok(Self::failure(error)),
            (true, _, Some(_)) => Err("successful result must not carry an error".to_string()),
            (false, Some(_), _) => Err("failed result must not carry a payload".to_string()),
            (false, None, None) => Err("failed result must carry an error".to_string()),
        }
    }
}
