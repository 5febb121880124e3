//! Tracing initialisation.
//!
//! Standard output carries the protocol, so console logs go to standard
//! error. An optional trace file gets a second, non-blocking layer.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Filter directive: `RUST_LOG` when set, then `-v` flags, then the
/// configured level, then `warn`.
pub fn filter_directive(verbose: u8, rust_log: Option<&str>, configured: Option<&str>) -> String {
    if let Some(rust_log) = rust_log.filter(|s| !s.trim().is_empty()) {
        return rust_log.to_string();
    }
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(), // -vvv or more
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so the trace file is flushed.
pub fn init(verbose: u8, configured_level: Option<&str>, trace_file: Option<&Path>) -> Option<WorkerGuard> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(verbose, rust_log.as_deref(), configured_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let console = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match trace_file.and_then(open_trace_file) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    guard
}

fn open_trace_file(path: &Path) -> Option<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).ok()?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_verbosity() {
        assert_eq!(filter_directive(1, Some("trace"), Some("error")), "trace");
        assert_eq!(filter_directive(3, Some("corethink=warn"), None), "corethink=warn");
    }

    #[test]
    fn test_verbosity_beats_config() {
        assert_eq!(filter_directive(1, None, Some("error")), "info");
        assert_eq!(filter_directive(1, Some(""), Some("error")), "info");
        assert_eq!(filter_directive(2, None, None), "debug");
        assert_eq!(filter_directive(5, None, None), "trace");
    }

    #[test]
    fn test_rust_log_then_config_then_default() {
        assert_eq!(
            filter_directive(0, Some("corethink=debug"), Some("info")),
            "corethink=debug"
        );
        assert_eq!(filter_directive(0, Some(" "), Some("info")), "info");
        assert_eq!(filter_directive(0, None, None), "warn");
    }

    #[test]
    fn test_trace_file_parent_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/trace.log");
        assert!(open_trace_file(&path).is_some());
        assert!(path.exists());
    }
}
