use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::identity::models::AuthenticationResult;
use crate::domain::identity::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Per-request authentication stage.
///
/// Attaches an `AuthenticationResult` to the request extensions and always
/// forwards; rejecting unauthenticated requests is the access policy's
/// decision, not this filter's. Runs the full pass at most once per
/// request even if the stage is entered more than once.
pub async fn authenticate_request(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.extensions().get::<AuthenticationResult>().is_none() {
        let result = match bearer_token(req.headers()) {
            Some(token) => state.auth_service.authenticate_token(token).await,
            None => AuthenticationResult::Unauthenticated,
        };

        req.extensions_mut().insert(result);
    }

    next.run(req).await
}

/// The token substring of a well-formed `Authorization: Bearer <token>`
/// header, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor handing handlers the authenticated identity for role checks
/// beyond what the route-level policy covers.
///
/// Rejects with 401 when the request carries no authenticated identity;
/// on policy-protected routes that cannot happen.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticationResult>() {
            Some(AuthenticationResult::Authenticated(identity)) => {
                Ok(CurrentUser(identity.clone()))
            }
            _ => Err(ApiError::Unauthorized(
                "Authentication required".to_string(),
            )),
        }
    }
}
