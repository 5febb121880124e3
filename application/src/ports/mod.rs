//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dispatch_logger;
pub mod resource_reader;
pub mod tool_schema;
pub mod unit_of_work;
