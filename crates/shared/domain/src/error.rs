//! Domain-level errors.
//!
//! Every failure of the account-creation flow is a [`DomainError`]: a
//! machine-readable [`ErrorCode`] plus a human message. Callers branch on the
//! code, never on the message text.

use serde::Serialize;
use thiserror::Error;

/// Enumerated error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// A field failed construction-time validation
    #[serde(rename = "REQUIRED_FIELD")]
    RequiredField,

    /// Reserved for a dedicated e-mail format failure
    #[serde(rename = "INVALID_EMAIL")]
    InvalidEmail,

    /// The e-mail is already bound to an account
    #[serde(rename = "USER_ALREADY_EXISTS")]
    UserAlreadyExists,

    /// Lookup on the repository failed
    #[serde(rename = "GET_DATA_REPOSITORY")]
    GetDataRepository,

    /// Persisting the user failed
    #[serde(rename = "STORE_REPOSITORY_ERROR")]
    StoreRepository,

    /// Hashing the password failed
    #[serde(rename = "GENERATE_HASH_PASSWORD")]
    GenerateHashPassword,
}

/// Coarse classification of error codes.
///
/// Lets a serving layer pick a transport status without matching every code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input rejected before any collaborator was called
    Validation,
    /// Business rule conflict
    Conflict,
    /// A collaborator failed; the message carries its cause
    Infrastructure,
}

impl ErrorCode {
    /// Symbol used on the wire and in `Display`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RequiredField => "REQUIRED_FIELD",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::UserAlreadyExists => "USER_ALREADY_EXISTS",
            ErrorCode::GetDataRepository => "GET_DATA_REPOSITORY",
            ErrorCode::StoreRepository => "STORE_REPOSITORY_ERROR",
            ErrorCode::GenerateHashPassword => "GENERATE_HASH_PASSWORD",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::RequiredField | ErrorCode::InvalidEmail => ErrorCategory::Validation,
            ErrorCode::UserAlreadyExists => ErrorCategory::Conflict,
            ErrorCode::GetDataRepository
            | ErrorCode::StoreRepository
            | ErrorCode::GenerateHashPassword => ErrorCategory::Infrastructure,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged domain error. Built at the point of failure and never mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{code}: {message}")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a required-field validation error
    pub fn required_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequiredField, message)
    }

    /// Wrap a collaborator failure as `"<context>: <cause>"`
    pub fn wrap(code: ErrorCode, context: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(code, format!("{}: {}", context, cause))
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check the code without looking at the message
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
