//! Tool Registry is the read-only catalog of callable tools.
//!
//! Built once at startup from the built-in catalog plus configured tools,
//! then shared immutably between all in-flight requests. Lookups are by
//! exact name; enumeration follows insertion order so `tools/list` is
//! stable across runs.

use super::entities::ToolSpec;
use crate::core::error::DomainError;
use std::collections::{HashMap, HashSet};

/// Insertion-ordered mapping from tool name to [`ToolSpec`].
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool (builder pattern).
    ///
    /// Fails if the name is already taken or the tool declares the same
    /// parameter twice.
    pub fn register(mut self, tool: ToolSpec) -> Result<Self, DomainError> {
        if self.index.contains_key(&tool.name) {
            return Err(DomainError::DuplicateTool(tool.name));
        }

        let mut seen = HashSet::new();
        for param in &tool.parameters {
            if !seen.insert(param.name.as_str()) {
                return Err(DomainError::DuplicateParameter {
                    tool: tool.name.clone(),
                    param: param.name.clone(),
                });
            }
        }

        self.index.insert(tool.name.clone(), self.tools.len());
        self.tools.push(tool);
        Ok(self)
    }

    /// Register several tools in order.
    pub fn register_all(
        self,
        tools: impl IntoIterator<Item = ToolSpec>,
    ) -> Result<Self, DomainError> {
        tools.into_iter().try_fold(self, |registry, tool| registry.register(tool))
    }

    /// Look up a tool by exact name. `None` is a normal negative result.
    pub fn lookup(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// All tools in insertion order.
    pub fn list(&self) -> &[ToolSpec] {
        &self.tools
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
