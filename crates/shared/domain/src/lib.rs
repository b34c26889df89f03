//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, its validated value objects, the account-creation models
//! and the domain error taxonomy.

pub mod account;
pub mod constants;
pub mod error;
pub mod mailbox;
pub mod password;
pub mod user;

pub use account::{CreateAccountUserModel, CreateAccountUserModelResponse};
pub use constants::*;
pub use error::{DomainError, DomainResult, ErrorCategory, ErrorCode};
pub use password::UserPassword;
pub use user::{User, UserEmail, UserName};
