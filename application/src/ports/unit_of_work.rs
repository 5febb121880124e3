//! Unit-of-work port
//!
//! The narrow capability the dispatch bridge needs from whatever actually
//! performs a tool's computation: start it, feed it input, read its two
//! output channels and wait for it to finish. The production adapter is a
//! child process; tests use in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};

/// One output channel of a running unit of work.
pub type OutputChannel = Box<dyn AsyncRead + Send + Unpin>;

/// The input channel of a running unit of work. Dropping it closes the
/// channel.
pub type InputChannel = Box<dyn AsyncWrite + Send + Unpin>;

/// How the serialized arguments reach the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDelivery {
    /// `--tool <name> --args <json>` on the command line
    #[default]
    Arguments,
    /// `--tool <name>` on the command line, JSON on standard input
    Stdin,
}

impl InputDelivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputDelivery::Arguments => "arguments",
            InputDelivery::Stdin => "stdin",
        }
    }
}

/// Everything needed to start one unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerInvocation {
    /// Tool name understood by the worker
    pub worker_tool: String,
    /// Argument mapping serialized as a JSON object
    pub args_json: String,
    pub delivery: InputDelivery,
}

impl WorkerInvocation {
    /// Invocation parameters in the order the worker expects them.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = vec!["--tool".to_string(), self.worker_tool.clone()];
        if self.delivery == InputDelivery::Arguments {
            args.push("--args".to_string());
            args.push(self.args_json.clone());
        }
        args
    }
}

/// The unit of work could not be created.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to start worker '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start worker: {0}")]
    Unavailable(String),
}

/// Starts units of work. Each call yields a fresh, exclusively owned unit.
#[async_trait]
pub trait WorkLauncher: Send + Sync {
    async fn start(&self, invocation: &WorkerInvocation) -> Result<Box<dyn UnitOfWork>, LaunchError>;
}

/// A started unit of work.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Hand over the input channel. Returns `None` when the unit of work
    /// takes no input or after the first call.
    fn take_input(&mut self) -> Option<InputChannel>;

    /// Hand over (primary, diagnostic) output channels. Returns `None` after
    /// the first call.
    fn take_outputs(&mut self) -> Option<(OutputChannel, OutputChannel)>;

    /// Wait for completion and return the exit code.
    async fn wait(&mut self) -> io::Result<i32>;

    /// Forcibly stop the unit of work and reap it.
    async fn terminate(&mut self) -> io::Result<()>;
}
