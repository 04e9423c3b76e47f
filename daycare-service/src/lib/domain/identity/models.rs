use std::fmt;

use crate::domain::identity::errors::UsernameError;

/// Role granted to admin accounts; gates account management and deletes.
pub const ROLE_ADMIN: &str = "admin";

/// Role granted to regular daycare staff accounts.
pub const ROLE_STAFF: &str = "staff";

/// Resolved principal for the lifetime of one request.
///
/// Roles come from the credential store at request time, not from the
/// token, so a role change takes effect on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Outcome of the per-request authentication pass.
///
/// Created fresh per request by the authentication middleware, stored in
/// request extensions, read by the access policy and handlers, discarded
/// at request end. Never persisted, never shared across requests.
#[derive(Debug, Clone)]
pub enum AuthenticationResult {
    Authenticated(Identity),
    Unauthenticated,
}

impl AuthenticationResult {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthenticationResult::Authenticated(identity) => Some(identity),
            AuthenticationResult::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

/// Stored login account as the credential store returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric,
/// underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            return Err(UsernameError::InvalidCharacters);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a login account with a raw password.
#[derive(Debug)]
pub struct CreateAccountCommand {
    pub username: Username,
    pub password: String,
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(Username::new("alice".to_string()).is_ok());
        assert!(Username::new("al".to_string()).is_err());
        assert!(Username::new("a".repeat(33)).is_err());
        assert!(Username::new("al ice".to_string()).is_err());
    }

    #[test]
    fn test_identity_role_check() {
        let identity = Identity {
            username: "alice".to_string(),
            roles: vec![ROLE_STAFF.to_string()],
        };

        assert!(identity.has_role(ROLE_STAFF));
        assert!(!identity.has_role(ROLE_ADMIN));
    }

    #[test]
    fn test_authentication_result_accessors() {
        let authenticated = AuthenticationResult::Authenticated(Identity {
            username: "alice".to_string(),
            roles: vec![],
        });

        assert!(authenticated.is_authenticated());
        assert_eq!(authenticated.identity().unwrap().username, "alice");
        assert!(!AuthenticationResult::Unauthenticated.is_authenticated());
    }
}
