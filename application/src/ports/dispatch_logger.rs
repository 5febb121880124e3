//! Port for structured dispatch logging.
//!
//! Defines the [`DispatchLogger`] trait for recording one record per
//! dispatch milestone (started, finished, rejected) to a machine-readable
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port gives operators telemetry in
//! which spawn failures, tool failures and timeouts are distinct outcomes.

use serde_json::Value;

/// A structured dispatch event for logging.
pub struct DispatchEvent {
    /// Event type identifier (e.g., "dispatch_started", "call_rejected").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DispatchEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging dispatch events.
///
/// `log` is synchronous and infallible; adapters swallow their own write
/// errors so request handling never depends on the log.
pub trait DispatchLogger: Send + Sync {
    fn log(&self, event: DispatchEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDispatchLogger;

impl DispatchLogger for NoDispatchLogger {
    fn log(&self, _event: DispatchEvent) {}
}
