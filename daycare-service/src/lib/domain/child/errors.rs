use thiserror::Error;

use crate::domain::common::PersonNameError;

/// Error for ChildId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChildIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for ChildAge validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChildAgeError {
    #[error("Age out of range: expected 0 to {max}, got {actual}")]
    OutOfRange { max: i32, actual: i32 },
}

/// Top-level error for child operations
#[derive(Debug, Clone, Error)]
pub enum ChildError {
    #[error("Invalid child ID: {0}")]
    InvalidId(#[from] ChildIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] PersonNameError),

    #[error("Invalid age: {0}")]
    InvalidAge(#[from] ChildAgeError),

    #[error("Child not found: {0}")]
    NotFound(String),

    #[error("Classroom not found: {0}")]
    ClassroomNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}
