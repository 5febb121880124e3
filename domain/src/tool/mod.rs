//! Tool domain module
//!
//! Defines what a callable tool is and what a call to it may carry.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │ ToolRegistry │───▶│ ToolCallRequest  │───▶│ ToolResult   │
//! │ (catalog)    │    │ (name + args)    │    │ (normalized) │
//! └──────┬───────┘    └────────┬─────────┘    └──────────────┘
//!        │                     │
//!        └─ ToolSpec ──────────┴─ ArgumentValidator
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`]: name, description, typed parameters and worker route
//! - [`ToolRegistry`]: insertion-ordered, read-only catalog
//! - [`ToolCallRequest`]: one invocation attempt
//! - [`ArgumentValidator`]: structural argument checks, pure and non-blocking
//! - [`ToolResult`]: canonical success/error result
//!
//! Everything here is pure. Running the worker lives behind the
//! application layer's `WorkLauncher` port.

pub mod entities;
pub mod registry;
pub mod validation;
pub mod value_objects;

pub use entities::{ParamKind, ToolCallRequest, ToolParameter, ToolSpec, value_kind_name};
pub use registry::ToolRegistry;
pub use validation::{ArgumentValidator, DefaultArgumentValidator, TypeMismatch, ValidationError};
pub use value_objects::ToolResult;
