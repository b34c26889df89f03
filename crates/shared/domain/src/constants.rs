//! Domain-level constants.
//!
//! Validation messages are part of the public contract: callers and tests
//! compare against them verbatim.

// =============================================================================
// Validation messages
// =============================================================================

/// Returned when the user name is empty
pub const MSG_NAME_REQUIRED: &str = "name is required";

/// Returned when the e-mail is empty
pub const MSG_EMAIL_REQUIRED: &str = "e-mail is required";

/// Returned when the e-mail cannot be parsed as a single mailbox
pub const MSG_EMAIL_INVALID: &str = "e-mail is not valid";

/// Returned when the password is empty
pub const MSG_PASSWORD_REQUIRED: &str = "password is required";

/// Returned when a hash replacing the plaintext password is empty
pub const MSG_PASSWORD_HASH_REQUIRED: &str = "password hash is required";

// =============================================================================
// Account creation
// =============================================================================

/// Business conflict: the e-mail already belongs to an account
pub const MSG_EMAIL_ALREADY_EXISTS: &str = "email already exists";

/// Context prefix for lookup-by-email failures
pub const CTX_GET_USER_BY_EMAIL: &str = "fail to get user by email on repository";

/// Context prefix for hashing failures
pub const CTX_GENERATE_HASH: &str = "fail on generate hash to password user";

/// Context prefix for store failures
pub const CTX_STORE_USER: &str = "fail to store user on repository";
