//! Repository ports consumed by the account use cases.

use async_trait::async_trait;

use common::AdapterResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lookup of a user by e-mail address.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GetUserByEmailRepository: Send + Sync {
    /// `Ok(None)` when no user has this e-mail; `Err` only for access failures.
    async fn get_user_by_email(&self, email: &str) -> AdapterResult<Option<User>>;
}

/// Persistence of a new user.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreUserRepository: Send + Sync {
    /// Persist `user` and return the canonical stored copy with its identity.
    async fn store(&self, user: User) -> AdapterResult<User>;
}
