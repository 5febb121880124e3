//! JSON-RPC server over newline-delimited streams.
//!
//! # Concurrency
//!
//! Each request runs on its own task in a [`JoinSet`], so a slow
//! `tools/call` never holds up `ping` or another call. Responses go through
//! an unbounded channel to a single writer task, which owns the output
//! stream and writes one whole line per response.
//!
//! # Shutdown
//!
//! - End of input: stop reading, wait for in-flight requests, flush.
//! - Cancellation: abort in-flight requests (their workers are killed when
//!   the dispatch is dropped), flush what was already answered.

use super::error::{McpError, Result};
use super::protocol::{
    CallToolParams, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION, ReadResourceParams,
    RpcError,
};
use super::transport::{Incoming, classify_line};
use crate::tools::JsonSchemaToolConverter;
use corethink_application::ports::resource_reader::{ResourceError, ResourceReaderPort};
use corethink_application::ports::tool_schema::ToolSchemaPort;
use corethink_application::ToolCallRouter;
use corethink_domain::tool::ToolCallRequest;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Name and version reported by `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

struct Methods {
    info: ServerInfo,
    router: ToolCallRouter,
    schema: Box<dyn ToolSchemaPort>,
    resources: Arc<dyn ResourceReaderPort>,
}

#[derive(Clone)]
pub struct McpServer {
    methods: Arc<Methods>,
}

impl McpServer {
    pub fn new(
        info: ServerInfo,
        router: ToolCallRouter,
        resources: Arc<dyn ResourceReaderPort>,
    ) -> Self {
        Self::with_schema(info, router, resources, Box::new(JsonSchemaToolConverter))
    }

    pub fn with_schema(
        info: ServerInfo,
        router: ToolCallRouter,
        resources: Arc<dyn ResourceReaderPort>,
        schema: Box<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            methods: Arc::new(Methods {
                info,
                router,
                schema,
                resources,
            }),
        }
    }

    /// Serve until end of input or cancellation.
    ///
    /// Only transport failures are returned; every per-request problem is
    /// answered on the wire.
    pub async fn serve<R, W>(&self, reader: R, writer: W, cancel: CancellationToken) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let writer_handle = tokio::spawn(write_responses(writer, rx));

        let mut segments = BufReader::new(reader).split(b'\n');
        let mut in_flight = JoinSet::new();
        let mut read_error = None;

        info!(server = %self.methods.info.name, "Serving JSON-RPC on stdio");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!(in_flight = in_flight.len(), "Cancelled, aborting in-flight requests");
                    in_flight.shutdown().await;
                    break;
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        warn!("Request task failed: {}", e);
                    }
                }
                segment = segments.next_segment() => {
                    let segment = match segment {
                        Ok(Some(segment)) => segment,
                        Ok(None) => {
                            debug!(in_flight = in_flight.len(), "End of input");
                            settle(&mut in_flight).await;
                            break;
                        }
                        Err(e) => {
                            // Requests already read still get their answers.
                            warn!(in_flight = in_flight.len(), "Failed to read input: {}", e);
                            settle(&mut in_flight).await;
                            read_error = Some(e);
                            break;
                        }
                    };
                    let line = match String::from_utf8(segment) {
                        Ok(line) => line,
                        Err(e) => {
                            debug!("Rejecting line that is not valid UTF-8");
                            let error = RpcError::parse_error(format!("invalid UTF-8: {}", e.utf8_error()));
                            let _ = tx.send(JsonRpcResponse::error(Value::Null, error));
                            continue;
                        }
                    };
                    let line = line.trim_end_matches('\r');
                    if line.trim().is_empty() {
                        continue;
                    }
                    trace!("<- {}", line);

                    match classify_line(line) {
                        Incoming::Request(request) => {
                            let methods = Arc::clone(&self.methods);
                            let tx = tx.clone();
                            in_flight.spawn(async move {
                                let response = methods.handle(request).await;
                                // Receiver only closes when the writer failed.
                                let _ = tx.send(response);
                            });
                        }
                        Incoming::Notification { method } => {
                            debug!(method = %method, "Ignoring notification");
                        }
                        Incoming::Malformed { id, error } => {
                            debug!(code = error.code, "Rejecting malformed message");
                            let _ = tx.send(JsonRpcResponse::error(id, error));
                        }
                    }
                }
            }
        }

        drop(tx);
        writer_handle
            .await
            .map_err(|e| McpError::WriterStopped(e.to_string()))??;
        match read_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Answer one request. Exposed for callers that do their own framing.
    pub async fn handle(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        self.methods.handle(request).await
    }
}

impl Methods {
    async fn handle(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, "Handling request");
        match self.call(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(error) => JsonRpcResponse::error(request.id, error),
        }
    }

    async fn call(&self, method: &str, params: Option<Value>) -> std::result::Result<Value, RpcError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {"tools": {}, "resources": {}},
                "serverInfo": self.info,
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({
                "tools": self.schema.all_tools_schema(self.router.registry()),
            })),
            "tools/call" => {
                let params: CallToolParams = parse_params(params)?;
                let request = ToolCallRequest {
                    tool_name: params.name,
                    arguments: params.arguments.unwrap_or_default(),
                };
                let response = self.router.handle(request).await;
                serde_json::to_value(response).map_err(|e| RpcError::internal(e.to_string()))
            }
            "resources/list" => Ok(json!({"resources": self.resources.list()})),
            "resources/read" => {
                let params: ReadResourceParams = parse_params(params)?;
                match self.resources.read(&params.uri).await {
                    Ok(contents) => Ok(json!({"contents": [contents]})),
                    Err(e @ ResourceError::UnknownResource(_)) => {
                        Err(RpcError::invalid_params(e.to_string()))
                    }
                    Err(e) => Err(RpcError::internal(e.to_string())),
                }
            }
            other => Err(RpcError::method_not_found(other)),
        }
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> std::result::Result<T, RpcError> {
    serde_json::from_value(params.unwrap_or_else(|| json!({})))
        .map_err(|e| RpcError::invalid_params(format!("Invalid params: {}", e)))
}

/// Wait for every in-flight request to finish.
async fn settle(in_flight: &mut JoinSet<()>) {
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            warn!("Request task failed: {}", e);
        }
    }
}

async fn write_responses<W>(writer: W, mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(writer);
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    writer.shutdown().await?;
    Ok(())
}
