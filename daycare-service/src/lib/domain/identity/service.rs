use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use chrono::Duration;

use crate::domain::identity::errors::AccountError;
use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AuthenticationResult;
use crate::domain::identity::models::CreateAccountCommand;
use crate::domain::identity::models::CredentialRecord;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::CredentialStore;

/// Verified against the supplied password when a username does not exist,
/// so known and unknown usernames take the same Argon2 time. Parameters
/// match [`auth::PasswordHasher`] defaults (argon2id, m=19456, t=2, p=1);
/// salt and digest are fixed zero bytes, so no password ever matches it.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Domain service for login, account creation, and per-request token
/// authentication.
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    authenticator: Arc<Authenticator>,
    token_lifetime: Duration,
}

impl AuthService {
    /// Create the service with injected dependencies.
    ///
    /// # Arguments
    /// * `credentials` - Account lookup implementation
    /// * `authenticator` - Shared password/token primitives
    /// * `token_lifetime_hours` - Validity window for issued tokens
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        authenticator: Arc<Authenticator>,
        token_lifetime_hours: i64,
    ) -> Self {
        Self {
            credentials,
            authenticator,
            token_lifetime: Duration::hours(token_lifetime_hours),
        }
    }

    /// Verify a username/password pair and mint a signed token.
    ///
    /// The only operation that reads a raw password for an existing
    /// account. Claims carry the subject, the issuance window, and the
    /// roles granted at login time.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password; the
    ///   two are indistinguishable to the caller
    /// * `Store` - Credential lookup failed
    /// * `TokenIssuance` - Claims construction or signing failed
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let Some(record) = self.credentials.lookup(username).await? else {
            tracing::debug!(username, "login for unknown username");
            // Burn the same Argon2 work as a real verification so response
            // timing does not reveal whether the username exists.
            let _ = self
                .authenticator
                .verify_password(password, DUMMY_PASSWORD_HASH);
            return Err(AuthError::InvalidCredentials);
        };

        let claims = Claims::issue(
            record.username.as_str(),
            record.roles.clone(),
            self.token_lifetime,
        )
        .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        self.authenticator
            .authenticate(password, &record.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                other => AuthError::TokenIssuance(other.to_string()),
            })
    }

    /// Create a login account, hashing the raw password for storage.
    ///
    /// # Errors
    /// * `PasswordHashing` - Hashing the password failed
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Store` - Persistence failed
    pub async fn create_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<CredentialRecord, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::PasswordHashing(e.to_string()))?;

        self.credentials
            .create(CredentialRecord {
                username: command.username.as_str().to_string(),
                password_hash,
                roles: command.roles,
            })
            .await
    }

    /// Authenticate a presented bearer token for one request.
    ///
    /// Two-phase flow: extract the subject without validation, resolve the
    /// identity's current record, then run full signature and expiry
    /// validation. Every failure mode collapses to `Unauthenticated` so the
    /// response cannot reveal which check failed; enforcement is the access
    /// policy's job.
    pub async fn authenticate_token(&self, token: &str) -> AuthenticationResult {
        let subject = match self.authenticator.extract_subject(token) {
            Ok(subject) => subject,
            Err(e) => {
                tracing::debug!(error = %e, "bearer token did not parse");
                return AuthenticationResult::Unauthenticated;
            }
        };

        // Sole suspension point of the authentication pass.
        let record = match self.credentials.lookup(&subject).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!(subject, "token subject is not a known account");
                return AuthenticationResult::Unauthenticated;
            }
            Err(e) => {
                tracing::warn!(error = %e, "credential lookup failed during authentication");
                return AuthenticationResult::Unauthenticated;
            }
        };

        let claims = match self.authenticator.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(subject, error = %e, "token validation failed");
                return AuthenticationResult::Unauthenticated;
            }
        };

        if claims.sub != record.username {
            tracing::debug!(subject, "token subject mismatch after validation");
            return AuthenticationResult::Unauthenticated;
        }

        // Roles come from the store, not the token, so revoked or newly
        // granted roles apply from the next request onward.
        AuthenticationResult::Authenticated(Identity {
            username: record.username,
            roles: record.roles,
        })
    }
}
