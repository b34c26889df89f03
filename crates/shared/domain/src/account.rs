//! Input and output models of the create-account use case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// Raw, untrusted account-creation input.
#[derive(Clone, Default)]
pub struct CreateAccountUserModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateAccountUserModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountUserModel")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Account as returned to callers (safe to expose, no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountUserModelResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CreateAccountUserModelResponse {
    /// Flatten a stored user. `None` if storage never assigned an identity.
    pub fn from_stored(user: &User) -> Option<Self> {
        let id = user.id()?;
        Some(Self {
            id: id.to_string(),
            name: user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        })
    }
}
