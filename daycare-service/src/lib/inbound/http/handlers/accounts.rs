use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::CreateAccountCommand;
use crate::domain::identity::models::Username;
use crate::inbound::http::router::AppState;

/// Create a login account. The route-level policy restricts this to
/// admins; the raw password is hashed before it reaches storage.
pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequestBody>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let username =
        Username::new(body.username).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let record = state
        .auth_service
        .create_account(CreateAccountCommand {
            username,
            password: body.password,
            roles: body.roles,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        AccountData {
            username: record.username,
            roles: record.roles,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAccountRequestBody {
    username: String,
    password: String,
    #[serde(default)]
    roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub username: String,
    pub roles: Vec<String>,
}
