use thiserror::Error;

use crate::domain::common::PersonNameError;

/// Error for TeacherId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeacherIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for teacher operations
#[derive(Debug, Clone, Error)]
pub enum TeacherError {
    #[error("Invalid teacher ID: {0}")]
    InvalidId(#[from] TeacherIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] PersonNameError),

    #[error("Teacher not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}
