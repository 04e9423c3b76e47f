use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::children::ChildSummaryData;
use super::teachers::TeacherData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::child::models::ChildId;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomDetails;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::models::ClassroomName;
use crate::domain::classroom::models::CreateClassroomCommand;
use crate::domain::classroom::models::PatchClassroomCommand;
use crate::domain::classroom::models::UpdateClassroomCommand;
use crate::domain::identity::models::ROLE_ADMIN;
use crate::domain::teacher::models::TeacherId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_classrooms(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ClassroomSummaryData>>, ApiError> {
    state
        .classroom_service
        .list_classrooms()
        .await
        .map_err(ApiError::from)
        .map(|classrooms| {
            ApiSuccess::new(
                StatusCode::OK,
                classrooms.iter().map(ClassroomSummaryData::from).collect(),
            )
        })
}

pub async fn get_classroom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ClassroomData>, ApiError> {
    let id = ClassroomId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .classroom_service
        .get_classroom(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}

pub async fn classrooms_by_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> Result<ApiSuccess<Vec<ClassroomSummaryData>>, ApiError> {
    let child_id =
        ChildId::from_string(&child_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .classroom_service
        .classrooms_by_child(&child_id)
        .await
        .map_err(ApiError::from)
        .map(|classrooms| {
            ApiSuccess::new(
                StatusCode::OK,
                classrooms.iter().map(ClassroomSummaryData::from).collect(),
            )
        })
}

pub async fn create_classroom(
    State(state): State<AppState>,
    Json(body): Json<ClassroomRequestBody>,
) -> Result<ApiSuccess<ClassroomSummaryData>, ApiError> {
    let command = CreateClassroomCommand {
        name: parse_name(body.name)?,
        teacher_id: parse_teacher_id(body.teacher_id)?,
    };

    state
        .classroom_service
        .create_classroom(command)
        .await
        .map_err(ApiError::from)
        .map(|ref classroom| ApiSuccess::new(StatusCode::CREATED, classroom.into()))
}

pub async fn update_classroom(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ClassroomRequestBody>,
) -> Result<ApiSuccess<ClassroomSummaryData>, ApiError> {
    let id = ClassroomId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = UpdateClassroomCommand {
        name: parse_name(body.name)?,
        teacher_id: parse_teacher_id(body.teacher_id)?,
    };

    state
        .classroom_service
        .update_classroom(&id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref classroom| ApiSuccess::new(StatusCode::OK, classroom.into()))
}

pub async fn patch_classroom(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PatchClassroomRequestBody>,
) -> Result<ApiSuccess<ClassroomSummaryData>, ApiError> {
    let id = ClassroomId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = PatchClassroomCommand {
        name: body.name.map(parse_name).transpose()?,
        teacher_id: body.teacher_id.map(|t| parse_teacher_id(Some(t))).transpose()?.flatten(),
    };

    state
        .classroom_service
        .patch_classroom(&id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref classroom| ApiSuccess::new(StatusCode::OK, classroom.into()))
}

pub async fn delete_classroom(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    if !identity.has_role(ROLE_ADMIN) {
        return Err(ApiError::Forbidden(format!("Requires role: {ROLE_ADMIN}")));
    }

    let id = ClassroomId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .classroom_service
        .delete_classroom(&id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

fn parse_name(name: String) -> Result<ClassroomName, ApiError> {
    ClassroomName::new(name).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))
}

fn parse_teacher_id(teacher_id: Option<String>) -> Result<Option<TeacherId>, ApiError> {
    teacher_id
        .map(|id| TeacherId::from_string(&id))
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassroomRequestBody {
    name: String,
    teacher_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatchClassroomRequestBody {
    name: Option<String>,
    teacher_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomSummaryData {
    pub id: String,
    pub name: String,
    pub teacher_id: Option<String>,
}

impl From<&Classroom> for ClassroomSummaryData {
    fn from(classroom: &Classroom) -> Self {
        Self {
            id: classroom.id.to_string(),
            name: classroom.name.as_str().to_string(),
            teacher_id: classroom.teacher_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomData {
    pub id: String,
    pub name: String,
    pub teacher: Option<TeacherData>,
    pub children: Vec<ChildSummaryData>,
}

impl From<&ClassroomDetails> for ClassroomData {
    fn from(details: &ClassroomDetails) -> Self {
        Self {
            id: details.classroom.id.to_string(),
            name: details.classroom.name.as_str().to_string(),
            teacher: details.teacher.as_ref().map(TeacherData::from),
            children: details.children.iter().map(ChildSummaryData::from).collect(),
        }
    }
}
