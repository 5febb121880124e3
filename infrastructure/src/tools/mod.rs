//! Tool catalog and schema conversion
//!
//! - `catalog`: the built-in reasoning tools plus configured custom tools
//! - `schema`: JSON Schema rendering for `tools/list`

pub mod catalog;
mod schema;

pub use catalog::{BUILTIN_TOOL_NAMES, build_registry, builtin_tools};
pub use schema::JsonSchemaToolConverter;
