//! Raw outcome of running one unit of work.

use serde::{Deserialize, Serialize};

/// Exit code used for outcomes synthesized after a deadline kill.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// How the unit of work finished.
///
/// A timeout carries no real exit code; callers see [`TIMEOUT_EXIT_CODE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Completion {
    /// The worker ran and exited with this code.
    Exited { code: i32 },
    /// The worker exceeded its deadline and was killed.
    TimedOut { after_secs: u64 },
    /// The worker could not be started at all.
    SpawnFailed { message: String },
    /// The worker started but its exit status could not be observed.
    WaitFailed { message: String },
}

/// Coarse classification used for logs and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    Success,
    ToolFailure,
    Timeout,
    SpawnError,
    BridgeError,
}

impl OutcomeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeClass::Success => "success",
            OutcomeClass::ToolFailure => "tool_failure",
            OutcomeClass::Timeout => "timeout",
            OutcomeClass::SpawnError => "spawn_error",
            OutcomeClass::BridgeError => "bridge_error",
        }
    }
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Captured output plus completion signal of one dispatch.
///
/// Both byte buffers hold their channel's data in arrival order and are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    completion: Completion,
}

impl DispatchOutcome {
    /// Worker ran to completion.
    pub fn exited(code: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            stdout,
            stderr,
            completion: Completion::Exited { code },
        }
    }

    /// Worker was killed by the deadline. Output collected so far is
    /// discarded.
    pub fn timed_out(after_secs: u64) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: Vec::new(),
            completion: Completion::TimedOut { after_secs },
        }
    }

    /// Worker could not be launched.
    pub fn spawn_failed(message: impl Into<String>) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: Vec::new(),
            completion: Completion::SpawnFailed {
                message: message.into(),
            },
        }
    }

    /// Worker started but waiting on it failed. Whatever was collected is
    /// kept for diagnostics; there is no exit code to report.
    pub fn wait_failed(message: impl Into<String>, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            stdout,
            stderr,
            completion: Completion::WaitFailed {
                message: message.into(),
            },
        }
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    /// Exit code as seen by the caller. Timeouts report
    /// [`TIMEOUT_EXIT_CODE`]; spawn and wait failures have none.
    pub fn exit_code(&self) -> Option<i32> {
        match self.completion {
            Completion::Exited { code } => Some(code),
            Completion::TimedOut { .. } => Some(TIMEOUT_EXIT_CODE),
            Completion::SpawnFailed { .. } | Completion::WaitFailed { .. } => None,
        }
    }

    pub fn class(&self) -> OutcomeClass {
        match self.completion {
            Completion::Exited { code: 0 } => OutcomeClass::Success,
            Completion::Exited { .. } => OutcomeClass::ToolFailure,
            Completion::TimedOut { .. } => OutcomeClass::Timeout,
            Completion::SpawnFailed { .. } => OutcomeClass::SpawnError,
            Completion::WaitFailed { .. } => OutcomeClass::BridgeError,
        }
    }
}
