//! Outcome normalization: raw worker output into a [`ToolResult`].
//!
//! Zero exit is always success. The primary output is decoded as JSON when
//! possible and kept as trimmed text otherwise, so a worker answering in
//! prose is still a successful call.

use super::outcome::{Completion, DispatchOutcome};
use crate::tool::value_objects::ToolResult;

/// Reduce a finished outcome to the canonical result.
pub fn normalize(outcome: &DispatchOutcome) -> ToolResult {
    match outcome.completion() {
        Completion::SpawnFailed { message } => ToolResult::failure(message.clone()),
        Completion::TimedOut { after_secs } => {
            ToolResult::failure(format!("worker timed out after {}s", after_secs))
        }
        Completion::WaitFailed { message } => {
            ToolResult::failure(format!("Failed to wait for worker: {}", message))
        }
        Completion::Exited { code: 0 } => decode_payload(outcome.stdout()),
        Completion::Exited { code } => {
            let diagnostic = String::from_utf8_lossy(outcome.stderr());
            let diagnostic = diagnostic.trim();
            if diagnostic.is_empty() {
                ToolResult::failure(format!("Process exited with code {}", code))
            } else {
                ToolResult::failure(diagnostic)
            }
        }
    }
}

fn decode_payload(stdout: &[u8]) -> ToolResult {
    match serde_json::from_slice::<serde_json::Value>(stdout) {
        Ok(value) => ToolResult::success(value),
        Err(_) => ToolResult::success(String::from_utf8_lossy(stdout).trim().to_string()),
    }
}
