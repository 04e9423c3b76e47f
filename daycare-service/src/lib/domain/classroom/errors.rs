use thiserror::Error;

/// Error for ClassroomId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassroomIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for ClassroomName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassroomNameError {
    #[error("Classroom name must not be empty")]
    Empty,

    #[error("Classroom name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for classroom operations
#[derive(Debug, Clone, Error)]
pub enum ClassroomError {
    #[error("Invalid classroom ID: {0}")]
    InvalidId(#[from] ClassroomIdError),

    #[error("Invalid classroom name: {0}")]
    InvalidName(#[from] ClassroomNameError),

    #[error("Classroom not found: {0}")]
    NotFound(String),

    #[error("Assigned teacher not found: {0}")]
    TeacherNotFound(String),

    #[error("No classrooms found for child: {0}")]
    NoneForChild(String),

    #[error("Database error: {0}")]
    Database(String),
}
