//! Application layer for corethink-mcp
//!
//! This crate contains the dispatch bridge, the request router and the port
//! definitions their adapters implement. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchParams;
pub use ports::{
    dispatch_logger::{DispatchEvent, DispatchLogger, NoDispatchLogger},
    resource_reader::{ResourceError, ResourceReaderPort},
    tool_schema::ToolSchemaPort,
    unit_of_work::{
        InputDelivery, LaunchError, OutputChannel, UnitOfWork, WorkLauncher, WorkerInvocation,
    },
};
pub use use_cases::dispatch_tool::{DispatchBridge, Dispatched, WorkDeadline};
pub use use_cases::route_tool_call::{
    CallToolResponse, ContentBlock, EMPTY_RESULT_TEXT, ToolCallError, ToolCallRouter,
};
