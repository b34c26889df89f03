//! Password value object.
//!
//! Holds the plaintext until the account flow swaps it for a hash. Hashing
//! itself lives behind the `Hasher` port; this type only tracks which form
//! it currently holds.

use crate::constants::{MSG_PASSWORD_HASH_REQUIRED, MSG_PASSWORD_REQUIRED};
use crate::error::{DomainError, DomainResult};

/// Password value object.
///
/// Never printed: `Debug` redacts the value in both forms.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword {
    value: String,
    hashed: bool,
}

impl std::fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPassword")
            .field("value", &"[REDACTED]")
            .field("hashed", &self.hashed)
            .finish()
    }
}

impl UserPassword {
    /// Wrap a plaintext password.
    ///
    /// # Errors
    /// `REQUIRED_FIELD` if the input is empty.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.is_empty() {
            return Err(DomainError::required_field(MSG_PASSWORD_REQUIRED));
        }
        Ok(Self {
            value: plain_text.to_string(),
            hashed: false,
        })
    }

    /// Wrap an existing hash (from the hasher or from storage).
    pub fn from_hash(hash: String) -> DomainResult<Self> {
        if hash.is_empty() {
            return Err(DomainError::required_field(MSG_PASSWORD_HASH_REQUIRED));
        }
        Ok(Self {
            value: hash,
            hashed: true,
        })
    }

    /// Raw value. Only meant for feeding the hasher or a storage adapter.
    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn is_hashed(&self) -> bool {
        self.hashed
    }
}
