//! User domain entity and its value objects.

use chrono::{DateTime, Utc};
use crate::constants::{MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED};
use crate::error::{DomainError, DomainResult};
use crate::mailbox::is_single_mailbox;
use crate::password::UserPassword;

/// User display name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: &str) -> DomainResult<Self> {
        if name.is_empty() {
            return Err(DomainError::required_field(MSG_NAME_REQUIRED));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User e-mail address. Never empty, always one RFC 5322 mailbox.
///
/// Held exactly as given: `Juillian Lee <juillian.lee@gmail.com>` stays in
/// that form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEmail(String);

impl UserEmail {
    /// Validate and wrap an e-mail address.
    ///
    /// A malformed address is still reported as `REQUIRED_FIELD`;
    /// `INVALID_EMAIL` is reserved.
    pub fn new(email: &str) -> DomainResult<Self> {
        if email.is_empty() {
            return Err(DomainError::required_field(MSG_EMAIL_REQUIRED));
        }

        if !is_single_mailbox(email) {
            return Err(DomainError::required_field(MSG_EMAIL_INVALID));
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User domain entity.
///
/// Fields are private: the only ways in are [`User::new`] and the narrow
/// mutators below, so an instance always holds validated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<String>,
    name: UserName,
    email: UserEmail,
    password: UserPassword,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user from raw fields.
    ///
    /// Validates name, e-mail and password in that order and returns the
    /// first failure; later fields are not looked at.
    pub fn new(
        id: Option<String>,
        name: &str,
        email: &str,
        password: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = UserName::new(name)?;
        let email = UserEmail::new(email)?;
        let password = UserPassword::new(password)?;

        Ok(Self {
            id,
            name,
            email,
            password,
            created_at,
            updated_at,
        })
    }

    /// Identity assigned by storage, `None` before the first store
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn password(&self) -> &UserPassword {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Assign the storage identity
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the plaintext password with its hash.
    ///
    /// The plaintext is dropped here and cannot be recovered from the entity.
    pub fn set_password_hash(&mut self, hash: String) -> DomainResult<()> {
        self.password = UserPassword::from_hash(hash)?;
        Ok(())
    }
}
