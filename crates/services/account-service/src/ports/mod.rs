//! Ports: abstract collaborators the use cases depend on.

mod cryptography;
mod repository;

pub use cryptography::{HashComparer, Hasher};
pub use repository::{GetUserByEmailRepository, StoreUserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use cryptography::{MockHashComparer, MockHasher};
#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockGetUserByEmailRepository, MockStoreUserRepository};
