//! Resource file locations from TOML (`[resources]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResourcesConfig {
    /// Backing file of `file://constraints`
    pub constraints: PathBuf,
    /// Backing file of `file://reasoning_log`
    pub reasoning_log: PathBuf,
    /// Backing file of `file://reasoning_history`
    pub reasoning_history: PathBuf,
    /// Backing file of `file://feature_flags`
    pub feature_flags: PathBuf,
}

impl Default for FileResourcesConfig {
    fn default() -> Self {
        Self {
            constraints: PathBuf::from("constraints.txt"),
            reasoning_log: PathBuf::from("logs/trace.log"),
            reasoning_history: PathBuf::from("logs/reasoning_history.md"),
            feature_flags: PathBuf::from("conf/feature_flags.yaml"),
        }
    }
}
