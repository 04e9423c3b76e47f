use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::ClaimsError;

/// Payload encoded inside a token.
///
/// Invariants are enforced at construction: the subject is non-empty and
/// the expiry is strictly after the issued-at timestamp. Deserialized
/// claims (from an inbound token) are re-checked by the codec instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username the token was issued to)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Roles granted at issuance
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Issue claims for `subject` valid from now for `lifetime`.
    ///
    /// # Errors
    /// * `EmptySubject` - Subject is empty
    /// * `InvalidLifetime` - Lifetime is zero or negative
    pub fn issue(
        subject: impl Into<String>,
        roles: Vec<String>,
        lifetime: Duration,
    ) -> Result<Self, ClaimsError> {
        let now = Utc::now().timestamp();
        Self::from_parts(subject, roles, now, now + lifetime.num_seconds())
    }

    /// Build claims from explicit timestamps.
    ///
    /// # Errors
    /// * `EmptySubject` - Subject is empty
    /// * `InvalidLifetime` - `exp` is not strictly after `iat`
    pub fn from_parts(
        subject: impl Into<String>,
        roles: Vec<String>,
        iat: i64,
        exp: i64,
    ) -> Result<Self, ClaimsError> {
        let sub = subject.into();
        if sub.is_empty() {
            return Err(ClaimsError::EmptySubject);
        }
        if exp <= iat {
            return Err(ClaimsError::InvalidLifetime { iat, exp });
        }
        Ok(Self {
            sub,
            iat,
            exp,
            roles,
        })
    }

    /// Whether the token is expired at `now` (expiry boundary inclusive).
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Whether `role` was granted at issuance.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
