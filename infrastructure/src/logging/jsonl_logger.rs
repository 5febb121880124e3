//! JSONL file writer for dispatch events.
//!
//! Each [`DispatchEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use corethink_application::ports::dispatch_logger::{DispatchEvent, DispatchLogger};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Dispatch logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Records from earlier runs are
/// kept; each line is flushed as it is written.
pub struct JsonlDispatchLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDispatchLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the caller falls back
    /// to no logging.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create dispatch log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open dispatch log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn record(event: DispatchEvent, timestamp: String) -> Value {
    match event.payload {
        Value::Object(mut map) => {
            map.insert("type".to_string(), Value::String(event.event_type.to_string()));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            Value::Object(map)
        }
        other => serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": other,
        }),
    }
}

impl DispatchLogger for JsonlDispatchLogger {
    fn log(&self, event: DispatchEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let Ok(line) = serde_json::to_string(&record(event, timestamp)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlDispatchLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/dispatch.jsonl");
        let logger = JsonlDispatchLogger::new(&path).unwrap();

        logger.log(DispatchEvent::new(
            "dispatch_started",
            json!({"tool": "reason_about_change", "delivery": "arguments"}),
        ));
        logger.log(DispatchEvent::new(
            "dispatch_finished",
            json!({"tool": "reason_about_change", "outcome": "spawn_error", "exit_code": null}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "dispatch_started");
        assert_eq!(records[0]["delivery"], "arguments");
        assert_eq!(records[1]["type"], "dispatch_finished");
        assert_eq!(records[1]["outcome"], "spawn_error");
        assert!(records[1]["exit_code"].is_null());

        let timestamp = records[0]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.jsonl");

        JsonlDispatchLogger::new(&path)
            .unwrap()
            .log(DispatchEvent::new("call_rejected", json!({"reason": "unknown_tool"})));
        JsonlDispatchLogger::new(&path)
            .unwrap()
            .log(DispatchEvent::new("call_rejected", json!({"reason": "invalid_arguments"})));

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["reason"], "invalid_arguments");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.jsonl");
        let logger = JsonlDispatchLogger::new(&path).unwrap();

        logger.log(DispatchEvent::new("note", json!("just a string")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file.
        assert!(JsonlDispatchLogger::new(dir.path()).is_none());
    }
}
