//! Errors raised by port adapters.
//!
//! Repository and hasher implementations report failures with
//! [`AdapterError`]. The use case never inspects the variant: it wraps the
//! `Display` text into a domain error with its own context, so the
//! message-carrying variants print the cause and nothing else.

use thiserror::Error;

/// Failure of an external collaborator (storage, hashing).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Storage read or write failed
    #[error("{0}")]
    Storage(String),

    /// Hash generation failed
    #[error("{0}")]
    Hashing(String),

    /// Adapter built with invalid settings
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Convenience constructors
impl AdapterError {
    pub fn storage(msg: impl Into<String>) -> Self {
        AdapterError::Storage(msg.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        AdapterError::Hashing(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AdapterError::Configuration(msg.into())
    }
}
