//! Dispatch domain: what one unit of work produced and how that becomes
//! a [`ToolResult`](crate::tool::ToolResult).
//!
//! - [`DispatchOutcome`]: captured output bytes plus completion signal
//! - [`DispatchLifecycle`]: state machine guarding the dispatch steps
//! - [`normalize`]: two-tier decode of an outcome into a result

pub mod normalize;
pub mod outcome;
pub mod state;

pub use normalize::normalize;
pub use outcome::{Completion, DispatchOutcome, OutcomeClass, TIMEOUT_EXIT_CODE};
pub use state::{DispatchLifecycle, DispatchState, Termination};
