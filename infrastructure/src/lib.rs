//! Infrastructure layer for corethink-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: worker processes, the dispatch log, file
//! resources, configuration loading and the JSON-RPC stdio server.

pub mod config;
pub mod logging;
pub mod mcp;
pub mod resources;
pub mod tools;
pub mod worker;

// Re-export commonly used types
pub use config::{ConfigError, ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use logging::JsonlDispatchLogger;
pub use mcp::{McpError, McpServer, ServerInfo};
pub use resources::FileResourceReader;
pub use tools::{JsonSchemaToolConverter, build_registry};
pub use worker::{LocateError, ProcessLauncher, WorkerCommand, WorkerLocator};
