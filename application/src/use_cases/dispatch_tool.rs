//! Dispatch Tool use case: the bridge between a validated call and one
//! unit of work.
//!
//! ```text
//! Idle ─▶ Starting ─▶ Running ─▶ Collecting ─▶ Terminated(Success|Failure)
//!             └──────────────────────────────▶ Terminated(SpawnError)
//! ```
//!
//! Each dispatch owns its unit of work and its output buffers for its whole
//! lifetime; nothing is shared between concurrent dispatches. Spawn errors
//! are never retried.

use crate::config::DispatchParams;
use crate::ports::dispatch_logger::{DispatchEvent, DispatchLogger, NoDispatchLogger};
use crate::ports::unit_of_work::{
    InputChannel, InputDelivery, OutputChannel, UnitOfWork, WorkLauncher, WorkerInvocation,
};
use corethink_domain::core::string::preview;
use corethink_domain::dispatch::{
    DispatchLifecycle, DispatchOutcome, DispatchState, OutcomeClass, normalize,
};
use corethink_domain::tool::{ToolResult, ToolSpec};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info, trace, warn};

/// Normalized result of one dispatch plus its telemetry class.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub result: ToolResult,
    pub class: OutcomeClass,
}

/// Deadline collaborator for the Collecting phase.
///
/// Covers input delivery as well as output collection. On expiry the unit
/// of work is terminated and a synthetic timeout outcome replaces whatever
/// was collected so far.
#[derive(Debug, Clone, Copy)]
pub struct WorkDeadline {
    limit: Duration,
}

impl WorkDeadline {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub async fn enforce(
        &self,
        unit: &mut dyn UnitOfWork,
        input: Option<(InputChannel, &[u8])>,
        stdout: OutputChannel,
        stderr: OutputChannel,
    ) -> DispatchOutcome {
        let collected =
            tokio::time::timeout(self.limit, collect(&mut *unit, input, stdout, stderr)).await;
        match collected {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(limit_secs = self.limit.as_secs(), "Worker deadline expired, terminating");
                if let Err(e) = unit.terminate().await {
                    warn!("Failed to terminate timed-out worker: {}", e);
                }
                DispatchOutcome::timed_out(self.limit.as_secs())
            }
        }
    }
}

/// Runs tool calls as units of work and normalizes what they produce.
pub struct DispatchBridge {
    launcher: Arc<dyn WorkLauncher>,
    params: DispatchParams,
    dispatch_logger: Arc<dyn DispatchLogger>,
}

impl Clone for DispatchBridge {
    fn clone(&self) -> Self {
        Self {
            launcher: self.launcher.clone(),
            params: self.params.clone(),
            dispatch_logger: self.dispatch_logger.clone(),
        }
    }
}

impl DispatchBridge {
    pub fn new(launcher: Arc<dyn WorkLauncher>, params: DispatchParams) -> Self {
        Self {
            launcher,
            params,
            dispatch_logger: Arc::new(NoDispatchLogger),
        }
    }

    /// Create with a dispatch logger.
    pub fn with_dispatch_logger(mut self, logger: Arc<dyn DispatchLogger>) -> Self {
        self.dispatch_logger = logger;
        self
    }

    pub fn params(&self) -> &DispatchParams {
        &self.params
    }

    /// Dispatch a validated call to exactly one unit of work.
    ///
    /// Never fails: every failure class is folded into the returned
    /// [`ToolResult`].
    pub async fn dispatch(&self, spec: &ToolSpec, args: &HashMap<String, Value>) -> Dispatched {
        let mut lifecycle = DispatchLifecycle::new();
        let started = Instant::now();

        step(&mut lifecycle, DispatchState::Starting, &spec.name);
        let invocation = WorkerInvocation {
            worker_tool: spec.worker_tool.clone(),
            args_json: args_to_json(args),
            delivery: self.params.delivery,
        };

        self.dispatch_logger.log(DispatchEvent::new(
            "dispatch_started",
            json!({
                "tool": spec.name,
                "worker_tool": invocation.worker_tool,
                "delivery": invocation.delivery.as_str(),
            }),
        ));
        debug!(tool = %spec.name, worker_tool = %invocation.worker_tool, "Dispatching tool call");

        let outcome = match self.launcher.start(&invocation).await {
            Err(e) => {
                warn!(tool = %spec.name, "Failed to start worker: {}", e);
                DispatchOutcome::spawn_failed(e.to_string())
            }
            Ok(mut unit) => {
                step(&mut lifecycle, DispatchState::Running, &spec.name);
                self.run(unit.as_mut(), &invocation, &mut lifecycle, &spec.name)
                    .await
            }
        };

        if let Err(e) = lifecycle.finish(&outcome) {
            warn!(tool = %spec.name, "Dispatch state error: {}", e);
        }
        trace!(tool = %spec.name, state = %lifecycle.state(), "Dispatch state");

        let class = outcome.class();
        let duration_ms = started.elapsed().as_millis() as u64;
        info!(
            tool = %spec.name,
            outcome = %class,
            exit_code = ?outcome.exit_code(),
            duration_ms,
            "Tool dispatch finished"
        );
        if class != OutcomeClass::Success && !outcome.stderr().is_empty() {
            debug!(
                tool = %spec.name,
                "Worker stderr: {}",
                preview(&String::from_utf8_lossy(outcome.stderr()), 200)
            );
        }

        self.dispatch_logger.log(DispatchEvent::new(
            "dispatch_finished",
            json!({
                "tool": spec.name,
                "outcome": class.as_str(),
                "exit_code": outcome.exit_code(),
                "duration_ms": duration_ms,
                "stdout_bytes": outcome.stdout().len(),
                "stderr_bytes": outcome.stderr().len(),
            }),
        ));

        Dispatched {
            result: normalize(&outcome),
            class,
        }
    }

    async fn run(
        &self,
        unit: &mut dyn UnitOfWork,
        invocation: &WorkerInvocation,
        lifecycle: &mut DispatchLifecycle,
        tool: &str,
    ) -> DispatchOutcome {
        let input = match invocation.delivery {
            InputDelivery::Stdin => match unit.take_input() {
                Some(channel) => Some((channel, invocation.args_json.as_bytes())),
                None => {
                    warn!(tool = %tool, "Worker input channel unavailable");
                    None
                }
            },
            InputDelivery::Arguments => None,
        };

        let (stdout, stderr) = unit.take_outputs().unwrap_or_else(|| {
            warn!(tool = %tool, "Worker output channels unavailable");
            (empty_channel(), empty_channel())
        });

        step(lifecycle, DispatchState::Collecting, tool);
        match self.params.timeout {
            Some(limit) => {
                WorkDeadline::new(limit)
                    .enforce(unit, input, stdout, stderr)
                    .await
            }
            None => collect(unit, input, stdout, stderr).await,
        }
    }
}

/// Feed the input and drain both output channels while waiting for
/// completion. All four run concurrently so a worker that writes before it
/// reads cannot stall the dispatch.
async fn collect(
    unit: &mut dyn UnitOfWork,
    input: Option<(InputChannel, &[u8])>,
    stdout: OutputChannel,
    stderr: OutputChannel,
) -> DispatchOutcome {
    let (_, stdout, stderr, status) =
        tokio::join!(feed(input), drain(stdout), drain(stderr), unit.wait());
    match status {
        Ok(code) => DispatchOutcome::exited(code, stdout, stderr),
        Err(e) => {
            warn!("Failed to wait for worker: {}", e);
            if let Err(kill_err) = unit.terminate().await {
                debug!("Failed to terminate worker after wait error: {}", kill_err);
            }
            DispatchOutcome::wait_failed(e.to_string(), stdout, stderr)
        }
    }
}

/// Write the whole input, then close the channel so the worker sees EOF.
async fn feed(input: Option<(InputChannel, &[u8])>) {
    let Some((mut channel, bytes)) = input else {
        return;
    };
    let written: std::io::Result<()> = async {
        channel.write_all(bytes).await?;
        channel.shutdown().await
    }
    .await;
    // The worker may exit before reading its input; its exit status still
    // decides the outcome.
    if let Err(e) = written {
        warn!("Failed to write worker input: {}", e);
    }
}

fn empty_channel() -> OutputChannel {
    Box::new(tokio::io::empty())
}

async fn drain(mut channel: OutputChannel) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Err(e) = channel.read_to_end(&mut buf).await {
        warn!("Failed to read worker output: {}", e);
    }
    buf
}

fn args_to_json(args: &HashMap<String, Value>) -> String {
    let map: Map<String, Value> = args.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    Value::Object(map).to_string()
}

fn step(lifecycle: &mut DispatchLifecycle, next: DispatchState, tool: &str) {
    match lifecycle.advance(next) {
        Ok(state) => trace!(tool = %tool, state = %state, "Dispatch state"),
        Err(e) => warn!(tool = %tool, "Dispatch state error: {}", e),
    }
}
