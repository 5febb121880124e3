//! Domain layer for corethink-mcp
//!
//! This crate contains the tool contracts, argument validation and outcome
//! normalization. It has no dependencies on process spawning, files or the
//! wire protocol.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A fixed catalog of reasoning tools, each described by a [`ToolSpec`] and
//! looked up through the [`ToolRegistry`]. Calls are checked structurally by
//! an [`ArgumentValidator`] before any work is spent on them.
//!
//! ## Dispatch
//!
//! Each valid call runs exactly one unit of work. What it produced is a
//! [`DispatchOutcome`]; [`normalize`] turns that into a [`ToolResult`].

pub mod core;
pub mod dispatch;
pub mod resource;
pub mod tool;

// Re-export commonly used types
pub use core::error::DomainError;
pub use dispatch::{
    Completion, DispatchLifecycle, DispatchOutcome, DispatchState, OutcomeClass,
    TIMEOUT_EXIT_CODE, Termination, normalize,
};
pub use resource::{ResourceContents, ResourceDescriptor};
pub use tool::{
    ArgumentValidator, DefaultArgumentValidator, ParamKind, ToolCallRequest, ToolParameter,
    ToolRegistry, ToolResult, ToolSpec, TypeMismatch, ValidationError,
};
