//! Configuration loading for corethink-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CORETHINK_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./corethink.toml` or `./.corethink.toml`
//! 4. Global: `$XDG_CONFIG_HOME/corethink-mcp/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    FileConfig, FileCustomToolConfig, FileCustomToolParameter, FileLoggingConfig,
    FileResourcesConfig, FileServerConfig, FileToolsConfig, FileWorkerConfig,
};
pub use issue::{ConfigIssue, Severity};
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX};
