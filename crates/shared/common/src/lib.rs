//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling for HTTP handlers and resolvers
//! - Configuration helpers
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
