//! Argon2id password hashing adapter.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use common::{AdapterError, AdapterResult, HashingConfig};

use crate::ports::{HashComparer, Hasher};

/// Hashes and verifies passwords with Argon2id.
///
/// Every hash gets a fresh random salt and is returned as a PHC string, so
/// the parameters used travel with the hash and `compare` needs no config.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Build a hasher from cost parameters.
    ///
    /// # Errors
    /// `AdapterError::Configuration` if argon2 rejects the parameters.
    pub fn new(config: &HashingConfig) -> AdapterResult<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AdapterError::configuration(format!("argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Hasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> AdapterResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AdapterError::hashing(format!("argon2 hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

impl HashComparer for Argon2Hasher {
    fn compare(&self, plain_text: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}
