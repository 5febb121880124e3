//! MCP server over stdio
//!
//! JSON-RPC 2.0, one message per line. Exposes `initialize`, `ping`,
//! `tools/list`, `tools/call`, `resources/list` and `resources/read`.

pub mod error;
pub mod protocol;
mod server;
pub mod transport;

pub use error::McpError;
pub use server::{McpServer, ServerInfo};
