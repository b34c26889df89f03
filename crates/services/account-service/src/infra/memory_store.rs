//! In-memory user store.
//!
//! Implements both repository ports over a map keyed by e-mail. Used by the
//! CLI and by integration tests; state lives as long as the instance.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AdapterError, AdapterResult};
use domain::User;

use crate::ports::{GetUserByEmailRepository, StoreUserRepository};

/// User store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl GetUserByEmailRepository for InMemoryUserStore {
    async fn get_user_by_email(&self, email: &str) -> AdapterResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

#[async_trait]
impl StoreUserRepository for InMemoryUserStore {
    async fn store(&self, user: User) -> AdapterResult<User> {
        if !user.password().is_hashed() {
            return Err(AdapterError::storage("refusing to store a plaintext password"));
        }

        let mut users = self.users.write().await;

        // Acts as the unique index on e-mail
        if users.contains_key(user.email().as_str()) {
            return Err(AdapterError::storage("e-mail already stored"));
        }

        let stored = user.with_id(Uuid::new_v4().to_string());
        users.insert(stored.email().as_str().to_string(), stored.clone());

        tracing::debug!(user_id = ?stored.id(), "User stored in memory");
        Ok(stored)
    }
}
