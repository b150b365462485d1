//! Shared building blocks for the paymask payment-entry engine.
//!
//! This crate holds the constants that define each field's display format,
//! the crate-wide error type, and the data model passed between the
//! maskers, the form validator and the submission collaborators.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
