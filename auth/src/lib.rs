//! Stateless authentication building blocks
//!
//! Pure, I/O-free primitives for a bearer-token session model:
//! - Password hashing (Argon2id)
//! - Signed token encoding and validation (`TokenCodec`)
//! - An `Authenticator` coordinating the two for login flows
//!
//! The service owning the credential store decides who exists and which
//! roles they carry; this crate only answers "does this password match this
//! hash" and "is this token authentic and current".
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::issue("alice", vec!["staff".into()], Duration::hours(8)).unwrap();
//! let token = codec.encode(&claims).unwrap();
//! assert_eq!(codec.decode(&token).unwrap().sub, "alice");
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Account creation: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and mint a token
//! let claims = Claims::issue("alice", vec![], Duration::hours(8)).unwrap();
//! let token = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Each request: validate the presented token
//! let decoded = auth.verify_token(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::ClaimsError;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
