//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration
///
/// # Example
///
/// ```toml
/// [logging]
/// level = "debug"
/// trace_file = "logs/trace.log"
/// dispatch_log = "logs/dispatch.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `tracing` filter directive used when neither `-v` nor `RUST_LOG` is set
    pub level: Option<String>,
    /// Mirror diagnostic logs into this file
    pub trace_file: Option<PathBuf>,
    /// Append dispatch telemetry (JSONL) to this file
    pub dispatch_log: Option<PathBuf>,
}
