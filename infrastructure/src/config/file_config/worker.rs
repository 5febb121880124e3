//! Worker configuration from TOML (`[worker]` section)

use corethink_application::{DispatchParams, InputDelivery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where to find the worker and how to run it.
///
/// # Example
///
/// ```toml
/// [worker]
/// candidates = ["src/corethink_mcp/cli.py", "corethink-mcp-cli"]
/// interpreter = "python3"
/// input = "stdin"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkerConfig {
    /// Ordered candidate locations; the first that resolves wins
    pub candidates: Vec<String>,
    /// Interpreter used for script candidates
    pub interpreter: String,
    /// How arguments reach the worker
    pub input: InputDelivery,
    /// Deadline per dispatch; absent means no deadline
    pub timeout_secs: Option<u64>,
    /// Working directory for the worker process
    pub working_dir: Option<PathBuf>,
}

impl Default for FileWorkerConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                "src/corethink_mcp/cli.py".to_string(),
                "corethink-mcp-cli".to_string(),
                "../src/corethink_mcp/cli.py".to_string(),
            ],
            interpreter: "python".to_string(),
            input: InputDelivery::Arguments,
            timeout_secs: None,
            working_dir: None,
        }
    }
}

impl FileWorkerConfig {
    pub fn dispatch_params(&self) -> DispatchParams {
        DispatchParams::default()
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
            .with_delivery(self.input)
    }
}
