//! Infrastructure adapters implementing the ports.

mod argon2_hasher;
mod memory_store;

pub use argon2_hasher::Argon2Hasher;
pub use memory_store::InMemoryUserStore;
