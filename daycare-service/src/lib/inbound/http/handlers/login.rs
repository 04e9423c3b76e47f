use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Public login endpoint exchanging a username/password pair for a bearer
/// token. Unknown user and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let token = state
        .auth_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

/// The authenticated caller's identity as the request pipeline resolved
/// it; mainly for clients inspecting their own roles.
pub async fn current_identity(
    CurrentUser(identity): CurrentUser,
) -> Result<ApiSuccess<IdentityData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        IdentityData {
            username: identity.username,
            roles: identity.roles,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityData {
    pub username: String,
    pub roles: Vec<String>,
}
