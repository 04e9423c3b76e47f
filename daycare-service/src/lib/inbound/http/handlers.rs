use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::child::errors::ChildError;
use crate::domain::classroom::errors::ClassroomError;
use crate::domain::identity::errors::AccountError;
use crate::domain::identity::errors::AuthError;
use crate::domain::teacher::errors::TeacherError;

pub mod accounts;
pub mod children;
pub mod classrooms;
pub mod login;
pub mod teachers;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Unknown user and wrong password share one message on purpose.
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::Store(_) | AuthError::TokenIssuance(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidUsername(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::PasswordHashing(_) | AccountError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TeacherError> for ApiError {
    fn from(err: TeacherError) -> Self {
        match err {
            TeacherError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TeacherError::InvalidId(_) => ApiError::BadRequest(err.to_string()),
            TeacherError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            TeacherError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ClassroomError> for ApiError {
    fn from(err: ClassroomError) -> Self {
        match err {
            ClassroomError::NotFound(_)
            | ClassroomError::TeacherNotFound(_)
            | ClassroomError::NoneForChild(_) => ApiError::NotFound(err.to_string()),
            ClassroomError::InvalidId(_) => ApiError::BadRequest(err.to_string()),
            ClassroomError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            ClassroomError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ChildError> for ApiError {
    fn from(err: ChildError) -> Self {
        match err {
            ChildError::NotFound(_) | ChildError::ClassroomNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ChildError::InvalidId(_) => ApiError::BadRequest(err.to_string()),
            ChildError::InvalidName(_) | ChildError::InvalidAge(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ChildError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
