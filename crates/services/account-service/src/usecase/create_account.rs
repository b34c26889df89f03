//! Create-account use case.
//!
//! Validate -> check e-mail uniqueness -> hash password -> store -> respond.
//! Each step runs once; the first failure is returned as a tagged
//! [`DomainError`] and nothing after it runs.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info};

use domain::{
    CreateAccountUserModel, CreateAccountUserModelResponse, DomainError, DomainResult, ErrorCode,
    User, CTX_GENERATE_HASH, CTX_GET_USER_BY_EMAIL, CTX_STORE_USER, MSG_EMAIL_ALREADY_EXISTS,
};

use crate::ports::{GetUserByEmailRepository, Hasher, StoreUserRepository};

/// Create-account use case trait for dependency injection.
#[async_trait]
pub trait CreateAccountUseCase: Send + Sync {
    /// Create an account from raw input
    async fn handle(
        &self,
        model: CreateAccountUserModel,
    ) -> DomainResult<CreateAccountUserModelResponse>;
}

/// Concrete implementation of CreateAccountUseCase over injected ports.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct CreateAccountUser {
    get_user_by_email: Arc<dyn GetUserByEmailRepository>,
    store_user: Arc<dyn StoreUserRepository>,
    hasher: Arc<dyn Hasher>,
}

impl CreateAccountUser {
    pub fn new(
        get_user_by_email: Arc<dyn GetUserByEmailRepository>,
        store_user: Arc<dyn StoreUserRepository>,
        hasher: Arc<dyn Hasher>,
    ) -> Self {
        Self {
            get_user_by_email,
            store_user,
            hasher,
        }
    }
}

fn hash_failure(cause: impl std::fmt::Display) -> DomainError {
    DomainError::wrap(ErrorCode::GenerateHashPassword, CTX_GENERATE_HASH, cause)
}

fn store_failure(cause: impl std::fmt::Display) -> DomainError {
    DomainError::wrap(ErrorCode::StoreRepository, CTX_STORE_USER, cause)
}

#[async_trait]
impl CreateAccountUseCase for CreateAccountUser {
    async fn handle(
        &self,
        model: CreateAccountUserModel,
    ) -> DomainResult<CreateAccountUserModelResponse> {
        let now = Utc::now();
        let mut user = User::new(
            None,
            &model.name,
            &model.email,
            &model.password,
            now,
            now,
        )
        .map_err(|e| {
            debug!(code = %e.code(), reason = e.message(), "Account input rejected");
            e
        })?;
        drop(model);

        let existing = self
            .get_user_by_email
            .get_user_by_email(user.email().as_str())
            .await
            .map_err(|e| {
                error!(error = %e, "User lookup by e-mail failed");
                DomainError::wrap(ErrorCode::GetDataRepository, CTX_GET_USER_BY_EMAIL, e)
            })?;

        if existing.is_some() {
            debug!("Account creation refused, e-mail already registered");
            return Err(DomainError::new(
                ErrorCode::UserAlreadyExists,
                MSG_EMAIL_ALREADY_EXISTS,
            ));
        }

        let hash = self.hasher.hash(user.password().expose()).map_err(|e| {
            error!(error = %e, "Password hashing failed");
            hash_failure(e)
        })?;
        user.set_password_hash(hash).map_err(|e| {
            error!("Hasher returned an empty hash");
            hash_failure(e.message())
        })?;

        let stored = self.store_user.store(user).await.map_err(|e| {
            error!(error = %e, "Storing user failed");
            store_failure(e)
        })?;

        let response = CreateAccountUserModelResponse::from_stored(&stored).ok_or_else(|| {
            error!("Store returned a user without identity");
            store_failure("stored user has no identity")
        })?;

        info!(user_id = %response.id, "Account created");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use common::AdapterError;

    use crate::ports::{MockGetUserByEmailRepository, MockHasher, MockStoreUserRepository};

    fn valid_input() -> CreateAccountUserModel {
        CreateAccountUserModel {
            name: "Juillian Lee".to_string(),
            email: "juillian.lee@gmail.com".to_string(),
            password: "abc123".to_string(),
        }
    }

    fn existing_user() -> User {
        let now = Utc::now();
        User::new(None, "Juillian Lee", "juillian.lee@gmail.com", "abc123", now, now)
            .unwrap()
            .with_id("1")
    }

    fn hasher_ok() -> MockHasher {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("passwordhash".to_string()));
        hasher
    }

    fn store_assigning_id() -> MockStoreUserRepository {
        let mut store = MockStoreUserRepository::new();
        store.expect_store().returning(|user| Ok(user.with_id("1")));
        store
    }

    fn lookup_not_found() -> MockGetUserByEmailRepository {
        let mut lookup = MockGetUserByEmailRepository::new();
        lookup.expect_get_user_by_email().returning(|_| Ok(None));
        lookup
    }

    fn use_case(
        lookup: MockGetUserByEmailRepository,
        store: MockStoreUserRepository,
        hasher: MockHasher,
    ) -> CreateAccountUser {
        CreateAccountUser::new(Arc::new(lookup), Arc::new(store), Arc::new(hasher))
    }

    /// Mocks with no expectations: any call panics the test
    fn untouched() -> CreateAccountUser {
        use_case(
            MockGetUserByEmailRepository::new(),
            MockStoreUserRepository::new(),
            MockHasher::new(),
        )
    }

    #[tokio::test]
    async fn test_create_account_success() {
        let mut lookup = MockGetUserByEmailRepository::new();
        lookup
            .expect_get_user_by_email()
            .with(eq("juillian.lee@gmail.com"))
            .times(1)
            .returning(|_| Ok(None));

        let uc = use_case(lookup, store_assigning_id(), hasher_ok());
        let response = uc.handle(valid_input()).await.unwrap();

        assert_eq!(response.id, "1");
        assert_eq!(response.name, "Juillian Lee");
        assert_eq!(response.email, "juillian.lee@gmail.com");
        assert!(response.created_at <= Utc::now());
        assert_eq!(response.created_at, response.updated_at);
    }

    #[tokio::test]
    async fn test_store_receives_hash_not_plaintext() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .with(eq("abc123"))
            .times(1)
            .returning(|_| Ok("passwordhash".to_string()));

        let mut store = MockStoreUserRepository::new();
        store
            .expect_store()
            .withf(|user| user.password().is_hashed() && user.password().expose() == "passwordhash")
            .times(1)
            .returning(|user| Ok(user.with_id("1")));

        let uc = use_case(lookup_not_found(), store, hasher);
        assert!(uc.handle(valid_input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_name_required() {
        let input = CreateAccountUserModel::default();
        let err = untouched().handle(input).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::RequiredField);
        assert_eq!(err.message(), "name is required");
    }

    #[tokio::test]
    async fn test_email_required() {
        let input = CreateAccountUserModel {
            name: "Juillian Lee".to_string(),
            ..Default::default()
        };
        let err = untouched().handle(input).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::RequiredField);
        assert_eq!(err.message(), "e-mail is required");
    }

    #[tokio::test]
    async fn test_email_not_valid() {
        let input = CreateAccountUserModel {
            name: "Juillian Lee".to_string(),
            email: "juillian".to_string(),
            ..Default::default()
        };
        let err = untouched().handle(input).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::RequiredField);
        assert_eq!(err.message(), "e-mail is not valid");
    }

    #[tokio::test]
    async fn test_password_required() {
        let input = CreateAccountUserModel {
            name: "Juillian Lee".to_string(),
            email: "juillianlee@gmail.com".to_string(),
            ..Default::default()
        };
        let err = untouched().handle(input).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::RequiredField);
        assert_eq!(err.message(), "password is required");
    }

    #[tokio::test]
    async fn test_email_already_exists() {
        let mut lookup = MockGetUserByEmailRepository::new();
        lookup
            .expect_get_user_by_email()
            .returning(|_| Ok(Some(existing_user())));

        let mut hasher = MockHasher::new();
        hasher.expect_hash().never();
        let mut store = MockStoreUserRepository::new();
        store.expect_store().never();

        let err = use_case(lookup, store, hasher)
            .handle(valid_input())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::UserAlreadyExists);
        assert_eq!(err.message(), "email already exists");
    }

    #[derive(Clone, Default)]
    struct LogCapture(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_email_already_exists_keeps_address_out_of_logs() {
        let logs = LogCapture::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut lookup = MockGetUserByEmailRepository::new();
        lookup
            .expect_get_user_by_email()
            .returning(|_| Ok(Some(existing_user())));

        let err = use_case(lookup, MockStoreUserRepository::new(), MockHasher::new())
            .handle(valid_input())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyExists);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("e-mail already registered"));
        assert!(!output.contains("juillian.lee@gmail.com"));
    }

    #[tokio::test]
    async fn test_get_user_by_email_error() {
        let mut lookup = MockGetUserByEmailRepository::new();
        lookup
            .expect_get_user_by_email()
            .returning(|_| Err(AdapterError::storage("Fail on get user by e-mail mock")));

        let mut hasher = MockHasher::new();
        hasher.expect_hash().never();

        let err = use_case(lookup, MockStoreUserRepository::new(), hasher)
            .handle(valid_input())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::GetDataRepository);
        assert_eq!(
            err.message(),
            "fail to get user by email on repository: Fail on get user by e-mail mock"
        );
    }

    #[tokio::test]
    async fn test_hash_error() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(AdapterError::hashing("fail generate hash password")));

        let mut store = MockStoreUserRepository::new();
        store.expect_store().never();

        let err = use_case(lookup_not_found(), store, hasher)
            .handle(valid_input())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::GenerateHashPassword);
        assert_eq!(
            err.message(),
            "fail on generate hash to password user: fail generate hash password"
        );
    }

    #[tokio::test]
    async fn test_empty_hash_is_a_hash_error() {
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok(String::new()));

        let mut store = MockStoreUserRepository::new();
        store.expect_store().never();

        let err = use_case(lookup_not_found(), store, hasher)
            .handle(valid_input())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::GenerateHashPassword);
    }

    #[tokio::test]
    async fn test_store_error() {
        let mut store = MockStoreUserRepository::new();
        store
            .expect_store()
            .returning(|_| Err(AdapterError::storage("Fail on store user")));

        let err = use_case(lookup_not_found(), store, hasher_ok())
            .handle(valid_input())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::StoreRepository);
        assert_eq!(
            err.message(),
            "fail to store user on repository: Fail on store user"
        );
        assert_eq!(
            err.to_string(),
            "STORE_REPOSITORY_ERROR: fail to store user on repository: Fail on store user"
        );
    }

    #[tokio::test]
    async fn test_store_without_identity_is_a_store_error() {
        let mut store = MockStoreUserRepository::new();
        store.expect_store().returning(Ok);

        let err = use_case(lookup_not_found(), store, hasher_ok())
            .handle(valid_input())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::StoreRepository);
        assert_eq!(
            err.message(),
            "fail to store user on repository: stored user has no identity"
        );
    }

    #[tokio::test]
    async fn test_second_call_with_same_input_conflicts() {
        let mut seq = mockall::Sequence::new();
        let mut lookup = MockGetUserByEmailRepository::new();
        lookup
            .expect_get_user_by_email()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        lookup
            .expect_get_user_by_email()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(existing_user())));

        let mut store = MockStoreUserRepository::new();
        store
            .expect_store()
            .times(1)
            .returning(|user| Ok(user.with_id("1")));

        let uc = use_case(lookup, store, hasher_ok());

        assert!(uc.handle(valid_input()).await.is_ok());
        let err = uc.handle(valid_input()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyExists);
    }
}
