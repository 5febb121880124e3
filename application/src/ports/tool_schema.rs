//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how they are described on
//! the wire" (infrastructure).

use corethink_domain::tool::{ToolRegistry, ToolSpec};

/// Port for converting tool contracts to protocol descriptors (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool to its `{name, description, inputSchema}` entry.
    fn tool_to_schema(&self, tool: &ToolSpec) -> serde_json::Value;

    /// Convert every registered tool, in registry order.
    fn all_tools_schema(&self, registry: &ToolRegistry) -> Vec<serde_json::Value> {
        registry
            .list()
            .iter()
            .map(|tool| self.tool_to_schema(tool))
            .collect()
    }
}
