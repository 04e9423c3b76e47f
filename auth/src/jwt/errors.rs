use thiserror::Error;

/// Error type for token encoding and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Token signature does not verify")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Error type for claims construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("Expiry must be strictly after issued-at: iat={iat}, exp={exp}")]
    InvalidLifetime { iat: i64, exp: i64 },
}
