//! Domain error types

use thiserror::Error;

/// Domain-level errors: catalog construction and dispatch bookkeeping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    #[error("Unknown parameter type: {0}")]
    UnknownParamKind(String),

    #[error("Tool '{tool}' declares parameter '{param}' more than once")]
    DuplicateParameter { tool: String, param: String },

    #[error("Invalid dispatch transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
