//! Use cases - Application business operations.

mod create_account;

pub use create_account::{CreateAccountUseCase, CreateAccountUser};
