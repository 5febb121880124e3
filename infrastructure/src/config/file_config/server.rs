//! Server identity from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw server configuration, reported in the `initialize` handshake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            name: "corethink-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
