//! Clipmatch Common Utilities
//!
//! Shared infrastructure for all clipmatch crates:
//! - Error types and result aliases
//! - Cooperative cancellation for long matching runs
//! - Tracing/logging initialization
//! - Configuration loading

pub mod cancel;
pub mod config;
pub mod error;
pub mod logging;

pub use cancel::*;
pub use config::*;
pub use error::*;
