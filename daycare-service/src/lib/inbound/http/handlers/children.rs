use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::child::models::Child;
use crate::domain::child::models::ChildAge;
use crate::domain::child::models::ChildId;
use crate::domain::child::models::CreateChildCommand;
use crate::domain::child::models::PatchChildCommand;
use crate::domain::child::models::UpdateChildCommand;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::common::PersonName;
use crate::domain::identity::models::ROLE_ADMIN;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_children(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ChildData>>, ApiError> {
    state
        .child_service
        .list_children()
        .await
        .map_err(ApiError::from)
        .map(|children| {
            ApiSuccess::new(
                StatusCode::OK,
                children.iter().map(ChildData::from).collect(),
            )
        })
}

pub async fn get_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let id = ChildId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .child_service
        .get_child(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref child| ApiSuccess::new(StatusCode::OK, child.into()))
}

pub async fn children_by_classroom(
    State(state): State<AppState>,
    Path(classroom_id): Path<String>,
) -> Result<ApiSuccess<Vec<ChildData>>, ApiError> {
    let classroom_id =
        ClassroomId::from_string(&classroom_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .child_service
        .children_by_classroom(&classroom_id)
        .await
        .map_err(ApiError::from)
        .map(|children| {
            ApiSuccess::new(
                StatusCode::OK,
                children.iter().map(ChildData::from).collect(),
            )
        })
}

pub async fn create_child(
    State(state): State<AppState>,
    Json(body): Json<ChildRequestBody>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let command = body.into_create_command()?;

    state
        .child_service
        .create_child(command)
        .await
        .map_err(ApiError::from)
        .map(|ref child| ApiSuccess::new(StatusCode::CREATED, child.into()))
}

pub async fn update_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ChildRequestBody>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let id = ChildId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.into_create_command()?;

    state
        .child_service
        .update_child(
            &id,
            UpdateChildCommand {
                first_name: command.first_name,
                last_name: command.last_name,
                age: command.age,
                classroom_id: command.classroom_id,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref child| ApiSuccess::new(StatusCode::OK, child.into()))
}

pub async fn patch_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PatchChildRequestBody>,
) -> Result<ApiSuccess<ChildData>, ApiError> {
    let id = ChildId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = PatchChildCommand {
        first_name: body
            .first_name
            .map(PersonName::new)
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?,
        last_name: body
            .last_name
            .map(PersonName::new)
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?,
        age: body
            .age
            .map(ChildAge::new)
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?,
        classroom_id: body
            .classroom_id
            .map(|id| ClassroomId::from_string(&id))
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    };

    state
        .child_service
        .patch_child(&id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref child| ApiSuccess::new(StatusCode::OK, child.into()))
}

pub async fn delete_child(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    if !identity.has_role(ROLE_ADMIN) {
        return Err(ApiError::Forbidden(format!("Requires role: {ROLE_ADMIN}")));
    }

    let id = ChildId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .child_service
        .delete_child(&id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChildRequestBody {
    first_name: String,
    last_name: String,
    age: i32,
    classroom_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatchChildRequestBody {
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<i32>,
    classroom_id: Option<String>,
}

impl ChildRequestBody {
    fn into_create_command(self) -> Result<CreateChildCommand, ApiError> {
        let first_name = PersonName::new(self.first_name)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        let last_name = PersonName::new(self.last_name)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        let age =
            ChildAge::new(self.age).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        let classroom_id = self
            .classroom_id
            .map(|id| ClassroomId::from_string(&id))
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(CreateChildCommand {
            first_name,
            last_name,
            age,
            classroom_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub classroom_id: Option<String>,
}

impl From<&Child> for ChildData {
    fn from(child: &Child) -> Self {
        Self {
            id: child.id.to_string(),
            first_name: child.first_name.as_str().to_string(),
            last_name: child.last_name.as_str().to_string(),
            age: child.age.value(),
            classroom_id: child.classroom_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummaryData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<&Child> for ChildSummaryData {
    fn from(child: &Child) -> Self {
        Self {
            id: child.id.to_string(),
            first_name: child.first_name.as_str().to_string(),
            last_name: child.last_name.as_str().to_string(),
            age: child.age.value(),
        }
    }
}
