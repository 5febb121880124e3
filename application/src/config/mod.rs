//! Application-level configuration.
//!
//! - [`DispatchParams`]: deadline and input delivery for each dispatch

pub mod dispatch_params;

pub use dispatch_params::DispatchParams;
