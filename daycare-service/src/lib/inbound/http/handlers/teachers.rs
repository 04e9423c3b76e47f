use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::classrooms::ClassroomSummaryData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::common::PersonName;
use crate::domain::identity::models::ROLE_ADMIN;
use crate::domain::teacher::models::CreateTeacherCommand;
use crate::domain::teacher::models::PatchTeacherCommand;
use crate::domain::teacher::models::Teacher;
use crate::domain::teacher::models::TeacherDetails;
use crate::domain::teacher::models::TeacherId;
use crate::domain::teacher::models::UpdateTeacherCommand;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TeacherData>>, ApiError> {
    state
        .teacher_service
        .list_teachers()
        .await
        .map_err(ApiError::from)
        .map(|teachers| {
            ApiSuccess::new(
                StatusCode::OK,
                teachers.iter().map(TeacherData::from).collect(),
            )
        })
}

pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<TeacherDetailData>, ApiError> {
    let id = TeacherId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .teacher_service
        .get_teacher(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}

pub async fn create_teacher(
    State(state): State<AppState>,
    Json(body): Json<TeacherRequestBody>,
) -> Result<ApiSuccess<TeacherData>, ApiError> {
    let (first_name, last_name) = body.into_names()?;

    state
        .teacher_service
        .create_teacher(CreateTeacherCommand {
            first_name,
            last_name,
        })
        .await
        .map_err(ApiError::from)
        .map(|ref teacher| ApiSuccess::new(StatusCode::CREATED, teacher.into()))
}

pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TeacherRequestBody>,
) -> Result<ApiSuccess<TeacherData>, ApiError> {
    let id = TeacherId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let (first_name, last_name) = body.into_names()?;

    state
        .teacher_service
        .update_teacher(
            &id,
            UpdateTeacherCommand {
                first_name,
                last_name,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref teacher| ApiSuccess::new(StatusCode::OK, teacher.into()))
}

pub async fn patch_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PatchTeacherRequestBody>,
) -> Result<ApiSuccess<TeacherData>, ApiError> {
    let id = TeacherId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = PatchTeacherCommand {
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
    };

    state
        .teacher_service
        .patch_teacher(&id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref teacher| ApiSuccess::new(StatusCode::OK, teacher.into()))
}

pub async fn delete_teacher(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    if !identity.has_role(ROLE_ADMIN) {
        return Err(ApiError::Forbidden(format!("Requires role: {ROLE_ADMIN}")));
    }

    let id = TeacherId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .teacher_service
        .delete_teacher(&id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeacherRequestBody {
    first_name: String,
    last_name: String,
}

impl TeacherRequestBody {
    fn into_names(self) -> Result<(PersonName, PersonName), ApiError> {
        let first_name = PersonName::new(self.first_name)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        let last_name = PersonName::new(self.last_name)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        Ok((first_name, last_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatchTeacherRequestBody {
    first_name: Option<String>,
    last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Teacher> for TeacherData {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id.to_string(),
            first_name: teacher.first_name.as_str().to_string(),
            last_name: teacher.last_name.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherDetailData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub classrooms: Vec<ClassroomSummaryData>,
}

impl From<&TeacherDetails> for TeacherDetailData {
    fn from(details: &TeacherDetails) -> Self {
        Self {
            id: details.teacher.id.to_string(),
            first_name: details.teacher.first_name.as_str().to_string(),
            last_name: details.teacher.last_name.as_str().to_string(),
            classrooms: details
                .classrooms
                .iter()
                .map(ClassroomSummaryData::from)
                .collect(),
        }
    }
}
