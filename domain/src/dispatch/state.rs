//! Dispatch state machine.
//!
//! Tracks the lifecycle of one unit of work from validated request to
//! terminal outcome.
//!
//! # State Transitions
//!
//! ```text
//! Idle ──> Starting ──> Running ──> Collecting ──> Terminated(Success)
//!              │                         └──────> Terminated(Failure)
//!              └──> Terminated(SpawnError)
//! ```
//!
//! A deadline kill is reported as `Terminated(Failure)` from either
//! `Running` or `Collecting`; the machine itself has no timeout state.

use super::outcome::{Completion, DispatchOutcome};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Terminal classification of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Success,
    Failure,
    SpawnError,
}

impl Termination {
    /// Terminal state implied by a finished outcome.
    pub fn of(outcome: &DispatchOutcome) -> Self {
        match outcome.completion() {
            Completion::Exited { code: 0 } => Termination::Success,
            Completion::Exited { .. }
            | Completion::TimedOut { .. }
            | Completion::WaitFailed { .. } => Termination::Failure,
            Completion::SpawnFailed { .. } => Termination::SpawnError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    Idle,
    Starting,
    Running,
    Collecting,
    Terminated(Termination),
}

impl DispatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchState::Terminated(_))
    }

    /// Whether `next` is a legal successor of this state.
    pub fn can_transition_to(&self, next: DispatchState) -> bool {
        use DispatchState::*;
        match (self, next) {
            (Idle, Starting) => true,
            (Starting, Running) => true,
            (Starting, Terminated(Termination::SpawnError)) => true,
            (Running, Collecting) => true,
            (Running, Terminated(Termination::Failure)) => true,
            (Collecting, Terminated(Termination::Success | Termination::Failure)) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for DispatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchState::Idle => write!(f, "idle"),
            DispatchState::Starting => write!(f, "starting"),
            DispatchState::Running => write!(f, "running"),
            DispatchState::Collecting => write!(f, "collecting"),
            DispatchState::Terminated(Termination::Success) => write!(f, "terminated(success)"),
            DispatchState::Terminated(Termination::Failure) => write!(f, "terminated(failure)"),
            DispatchState::Terminated(Termination::SpawnError) => {
                write!(f, "terminated(spawn_error)")
            }
        }
    }
}

/// Owned tracker for one dispatch. Rejects illegal transitions instead of
/// silently overwriting the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchLifecycle {
    state: DispatchState,
}

impl Default for DispatchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchLifecycle {
    pub fn new() -> Self {
        Self {
            state: DispatchState::Idle,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn advance(&mut self, next: DispatchState) -> Result<DispatchState, DomainError> {
        if !self.state.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        self.state = next;
        Ok(next)
    }

    /// Move to the terminal state matching `outcome`.
    pub fn finish(&mut self, outcome: &DispatchOutcome) -> Result<DispatchState, DomainError> {
        self.advance(DispatchState::Terminated(Termination::of(outcome)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut lifecycle = DispatchLifecycle::new();
        lifecycle.advance(DispatchState::Starting).unwrap();
        lifecycle.advance(DispatchState::Running).unwrap();
        lifecycle.advance(DispatchState::Collecting).unwrap();
        lifecycle
            .finish(&DispatchOutcome::exited(0, b"{}".to_vec(), vec![]))
            .unwrap();

        assert_eq!(
            lifecycle.state(),
            DispatchState::Terminated(Termination::Success)
        );
        assert!(lifecycle.state().is_terminal());
    }

    #[test]
    fn test_spawn_error_skips_running() {
        let mut lifecycle = DispatchLifecycle::new();
        lifecycle.advance(DispatchState::Starting).unwrap();
        lifecycle
            .finish(&DispatchOutcome::spawn_failed("not found"))
            .unwrap();

        assert_eq!(
            lifecycle.state(),
            DispatchState::Terminated(Termination::SpawnError)
        );
    }

    #[test]
    fn test_timeout_terminates_as_failure() {
        let mut lifecycle = DispatchLifecycle::new();
        lifecycle.advance(DispatchState::Starting).unwrap();
        lifecycle.advance(DispatchState::Running).unwrap();
        lifecycle.finish(&DispatchOutcome::timed_out(3)).unwrap();

        assert_eq!(
            lifecycle.state(),
            DispatchState::Terminated(Termination::Failure)
        );
    }

    #[test]
    fn test_wait_failure_terminates_as_failure() {
        let mut lifecycle = DispatchLifecycle::new();
        lifecycle.advance(DispatchState::Starting).unwrap();
        lifecycle.advance(DispatchState::Running).unwrap();
        lifecycle.advance(DispatchState::Collecting).unwrap();
        lifecycle
            .finish(&DispatchOutcome::wait_failed("interrupted", vec![], vec![]))
            .unwrap();

        assert_eq!(
            lifecycle.state(),
            DispatchState::Terminated(Termination::Failure)
        );
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let mut lifecycle = DispatchLifecycle::new();
        let err = lifecycle.advance(DispatchState::Running).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: "idle".to_string(),
                to: "running".to_string(),
            }
        );

        lifecycle.advance(DispatchState::Starting).unwrap();
        lifecycle.advance(DispatchState::Running).unwrap();
        assert!(
            lifecycle
                .finish(&DispatchOutcome::spawn_failed("late"))
                .is_err()
        );
    }

    #[test]
    fn test_terminal_state_is_final() {
        let terminal = DispatchState::Terminated(Termination::Failure);
        for next in [
            DispatchState::Idle,
            DispatchState::Starting,
            DispatchState::Running,
            DispatchState::Collecting,
            DispatchState::Terminated(Termination::Success),
        ] {
            assert!(!terminal.can_transition_to(next));
        }
    }
}
