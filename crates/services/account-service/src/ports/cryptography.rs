//! Password hashing ports.

use common::AdapterResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Hasher: Send + Sync {
    fn hash(&self, plain_text: &str) -> AdapterResult<String>;
}

/// Verification of a plaintext against a stored hash.
///
/// Not used by account creation; kept for the login flow.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait HashComparer: Send + Sync {
    fn compare(&self, plain_text: &str, hash: &str) -> bool;
}
