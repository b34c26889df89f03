//! Common utilities shared by the account services.
//!
//! This crate provides:
//! - The error type every port adapter reports failures with
//! - Configuration structures
//! - Tracing bootstrap

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AdapterError, AdapterResult};
