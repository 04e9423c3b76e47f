use crate::jwt::Claims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Coordinates password verification and token minting.
///
/// The only component that ever sees a raw password. The signing secret is
/// injected once at construction and shared immutably for the process
/// lifetime.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator signing tokens with `jwt_secret`.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            codec: TokenCodec::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint a signed token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Password` - Stored hash could not be parsed
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.codec.encode(claims)?)
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// Returns `Ok(false)` on mismatch rather than an error, so callers can
    /// run the check for its cost alone when no real hash exists.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Validate a presented token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, forged or expired
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.codec.decode(token)
    }

    /// Decode a token's subject without full validation.
    ///
    /// See [`TokenCodec::extract_subject`] for the trust caveats.
    ///
    /// # Errors
    /// * `TokenError` - Token structure does not parse
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.codec.extract_subject(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn claims_for(subject: &str) -> Claims {
        Claims::issue(subject, vec!["staff".into()], Duration::hours(1)).unwrap()
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate("my_password", &hash, &claims_for("alice"))
            .expect("Authentication failed");

        let decoded = authenticator
            .verify_token(&token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "alice");
        assert!(decoded.has_role("staff"));
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, &claims_for("alice"));
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_foreign_token() {
        let ours = Authenticator::new(SECRET);
        let theirs = Authenticator::new(b"different_secret_also_32_bytes_long!");

        let hash = theirs.hash_password("pw").unwrap();
        let token = theirs.authenticate("pw", &hash, &claims_for("alice")).unwrap();

        assert_eq!(ours.verify_token(&token), Err(TokenError::InvalidSignature));
    }
}
