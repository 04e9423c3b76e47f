use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for credential store operations
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Error for the login operation.
///
/// Unknown username and wrong password both collapse to
/// `InvalidCredentials`; the distinction must never reach the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential store error: {0}")]
    Store(#[from] CredentialStoreError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),
}

/// Error for account management operations
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Credential store error: {0}")]
    Store(#[from] CredentialStoreError),
}
