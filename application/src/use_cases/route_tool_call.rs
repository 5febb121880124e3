//! Route Tool Call use case.
//!
//! Sequencing for one `tools/call`:
//!
//! 1. Registry lookup (unknown name → error response, nothing dispatched)
//! 2. Argument validation (invalid → error response, nothing dispatched)
//! 3. [`DispatchBridge::dispatch`] → normalized [`ToolResult`]
//! 4. Map the result to the protocol's `{content, isError}` shape
//!
//! The router never looks inside payloads beyond that mapping.

use crate::ports::dispatch_logger::{DispatchEvent, DispatchLogger, NoDispatchLogger};
use crate::use_cases::dispatch_tool::{DispatchBridge, Dispatched};
use corethink_domain::dispatch::OutcomeClass;
use corethink_domain::tool::{
    ArgumentValidator, DefaultArgumentValidator, ToolCallRequest, ToolRegistry, ToolResult,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Body used when a call produced nothing to show.
pub const EMPTY_RESULT_TEXT: &str = "No result returned";

/// A call rejected before any dispatch work was spent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    InvalidArguments(#[from] ValidationError),
}

impl ToolCallError {
    pub fn reason(&self) -> &'static str {
        match self {
            ToolCallError::UnknownTool(_) => "unknown_tool",
            ToolCallError::InvalidArguments(_) => "invalid_arguments",
        }
    }
}

/// One block of a tool-call response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

/// Protocol-shaped answer to a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToolResponse {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResponse {
    pub fn text(text: impl Into<String>, is_error: bool) -> Self {
        let text = text.into();
        let text = if text.is_empty() {
            EMPTY_RESULT_TEXT.to_string()
        } else {
            text
        };
        Self {
            content: vec![ContentBlock::Text { text }],
            is_error,
        }
    }

    /// Map a normalized result. Spawn errors are prefixed so callers can
    /// tell an environment problem from a failed tool.
    pub fn from_result(tool: &str, result: &ToolResult, class: OutcomeClass) -> Self {
        let body = result.body_text();
        if class == OutcomeClass::SpawnError {
            Self::text(format!("Error calling tool {}: {}", tool, body), true)
        } else {
            Self::text(body, !result.is_success())
        }
    }

    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ContentBlock::Text { text } => text.as_str(),
        })
    }
}

/// Request router: registry → validator → bridge → response.
pub struct ToolCallRouter {
    registry: Arc<ToolRegistry>,
    validator: Arc<dyn ArgumentValidator>,
    bridge: DispatchBridge,
    dispatch_logger: Arc<dyn DispatchLogger>,
}

impl Clone for ToolCallRouter {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            validator: self.validator.clone(),
            bridge: self.bridge.clone(),
            dispatch_logger: self.dispatch_logger.clone(),
        }
    }
}

impl ToolCallRouter {
    pub fn new(registry: Arc<ToolRegistry>, bridge: DispatchBridge) -> Self {
        Self {
            registry,
            validator: Arc::new(DefaultArgumentValidator),
            bridge,
            dispatch_logger: Arc::new(NoDispatchLogger),
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn ArgumentValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Create with a dispatch logger (used for rejected calls).
    pub fn with_dispatch_logger(mut self, logger: Arc<dyn DispatchLogger>) -> Self {
        self.dispatch_logger = logger;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Look up, validate and dispatch. Rejections never reach the bridge.
    pub async fn call(&self, request: &ToolCallRequest) -> Result<Dispatched, ToolCallError> {
        let spec = self
            .registry
            .lookup(&request.tool_name)
            .ok_or_else(|| ToolCallError::UnknownTool(request.tool_name.clone()))?;

        self.validator.validate(spec, &request.arguments)?;

        Ok(self.bridge.dispatch(spec, &request.arguments).await)
    }

    /// Handle one call end to end, producing the protocol response.
    pub async fn handle(&self, request: ToolCallRequest) -> CallToolResponse {
        match self.call(&request).await {
            Ok(dispatched) => {
                CallToolResponse::from_result(&request.tool_name, &dispatched.result, dispatched.class)
            }
            Err(e) => {
                info!(tool = %request.tool_name, reason = e.reason(), "Rejected tool call: {}", e);
                self.dispatch_logger.log(DispatchEvent::new(
                    "call_rejected",
                    json!({
                        "tool": request.tool_name,
                        "reason": e.reason(),
                        "message": e.to_string(),
                    }),
                ));
                debug!(tool = %request.tool_name, "No unit of work started");
                CallToolResponse::text(e.to_string(), true)
            }
        }
    }
}
