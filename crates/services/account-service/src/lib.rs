//! Account Service Library
//!
//! This crate provides account creation over abstract ports: the use case
//! depends on repository and hasher traits, and the `infra` module supplies
//! the concrete adapters the binary wires in.

pub mod config;
pub mod infra;
pub mod ports;
pub mod usecase;

use std::sync::Arc;

use tracing::info;

use common::AdapterResult;

use crate::config::AccountServiceConfig;
use crate::infra::{Argon2Hasher, InMemoryUserStore};
use crate::usecase::CreateAccountUser;

/// Services wired with the default adapters.
pub struct AccountServices {
    pub store: Arc<InMemoryUserStore>,
    pub hasher: Arc<Argon2Hasher>,
    pub create_account: CreateAccountUser,
}

/// Wire the in-memory store and the Argon2 hasher into the use case.
///
/// # Errors
/// Fails if the hashing parameters are invalid.
pub fn build_services(config: &AccountServiceConfig) -> AdapterResult<AccountServices> {
    let store = Arc::new(InMemoryUserStore::new());
    let hasher = Arc::new(Argon2Hasher::new(&config.hashing)?);

    let create_account = CreateAccountUser::new(store.clone(), store.clone(), hasher.clone());
    info!(
        service = %config.service.service_name,
        memory_kib = config.hashing.memory_kib,
        iterations = config.hashing.iterations,
        "Account services ready"
    );

    Ok(AccountServices {
        store,
        hasher,
        create_account,
    })
}
