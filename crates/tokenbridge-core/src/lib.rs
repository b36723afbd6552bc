//! # tokenbridge-core
//!
//! Foundation crate for the tokenbridge design-token engine.
//! Shared types, per-subsystem errors, layered configuration,
//! tracing setup, and the named matching thresholds.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use types::{ComponentFile, TokenCategory};
