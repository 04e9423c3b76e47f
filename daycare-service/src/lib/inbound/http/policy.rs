use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::identity::models::AuthenticationResult;
use crate::domain::identity::models::ROLE_ADMIN;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// What a route demands of the authentication result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Anyone, including anonymous requests.
    Public,
    /// Any authenticated identity.
    Authenticated,
    /// An authenticated identity holding the named role.
    Role(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    Exact(String),
    Prefix(String),
}

impl Pattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(p) => path == p,
            Pattern::Prefix(p) => path.starts_with(p.as_str()),
        }
    }
}

/// Route-to-requirement table, consulted after the authentication stage.
///
/// The table is closed: a path no rule matches requires authentication.
/// First matching rule wins, so put exact rules before overlapping
/// prefixes.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: Vec<(Pattern, Requirement)>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule matching one exact path.
    pub fn exact(mut self, path: impl Into<String>, requirement: Requirement) -> Self {
        self.rules.push((Pattern::Exact(path.into()), requirement));
        self
    }

    /// Add a rule matching a path prefix.
    pub fn prefix(mut self, path: impl Into<String>, requirement: Requirement) -> Self {
        self.rules.push((Pattern::Prefix(path.into()), requirement));
        self
    }

    /// The requirement for `path`; defaults to `Authenticated` when no
    /// rule matches (fail-closed).
    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, requirement)| requirement.clone())
            .unwrap_or(Requirement::Authenticated)
    }
}

/// The policy this service ships: the login endpoint and the health probe
/// are public, account management is admin-only, everything else needs an
/// authenticated caller.
pub fn default_policy() -> AccessPolicy {
    AccessPolicy::new()
        .exact("/health", Requirement::Public)
        .exact("/api/auth/login", Requirement::Public)
        .prefix("/api/accounts", Requirement::Role(ROLE_ADMIN.to_string()))
}

/// Enforcement stage, composed directly after the authentication stage.
///
/// 401 for a protected route without an authenticated identity, 403 for an
/// authenticated identity missing a required role. Those two are the only
/// outward-distinguishable failure modes.
pub async fn enforce(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let requirement = state.access_policy.requirement_for(req.uri().path());

    if requirement == Requirement::Public {
        return Ok(next.run(req).await);
    }

    let identity = match req.extensions().get::<AuthenticationResult>() {
        Some(AuthenticationResult::Authenticated(identity)) => identity,
        _ => {
            return Err(ApiError::Unauthorized(
                "Authentication required".to_string(),
            ))
        }
    };

    if let Requirement::Role(role) = &requirement {
        if !identity.has_role(role) {
            tracing::debug!(
                username = %identity.username,
                required_role = %role,
                path = req.uri().path(),
                "role requirement not met"
            );
            return Err(ApiError::Forbidden(format!("Requires role: {role}")));
        }
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_path_requires_authentication() {
        let policy = AccessPolicy::new().exact("/health", Requirement::Public);

        assert_eq!(
            policy.requirement_for("/api/anything"),
            Requirement::Authenticated
        );
        assert_eq!(policy.requirement_for("/"), Requirement::Authenticated);
    }

    #[test]
    fn test_exact_rule_does_not_match_subpaths() {
        let policy = AccessPolicy::new().exact("/api/auth/login", Requirement::Public);

        assert_eq!(
            policy.requirement_for("/api/auth/login"),
            Requirement::Public
        );
        assert_eq!(
            policy.requirement_for("/api/auth/login/extra"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn test_prefix_rule_matches_subpaths() {
        let policy =
            AccessPolicy::new().prefix("/api/accounts", Requirement::Role("admin".to_string()));

        assert_eq!(
            policy.requirement_for("/api/accounts"),
            Requirement::Role("admin".to_string())
        );
        assert_eq!(
            policy.requirement_for("/api/accounts/123"),
            Requirement::Role("admin".to_string())
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let policy = AccessPolicy::new()
            .exact("/api/reports/public", Requirement::Public)
            .prefix("/api/reports", Requirement::Role("admin".to_string()));

        assert_eq!(
            policy.requirement_for("/api/reports/public"),
            Requirement::Public
        );
        assert_eq!(
            policy.requirement_for("/api/reports/monthly"),
            Requirement::Role("admin".to_string())
        );
    }
}
