//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: catalog and dispatch errors
//! - [`string::preview`]: log-friendly text shortening

pub mod error;
pub mod string;
