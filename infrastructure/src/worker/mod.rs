//! Worker process adapters
//!
//! - [`WorkerLocator`] resolves the worker once at startup
//! - [`ProcessLauncher`] implements the `WorkLauncher` port with one child
//!   process per dispatch

mod locator;
mod process;

pub use locator::{LocateError, WorkerCommand, WorkerLocator};
pub use process::ProcessLauncher;
