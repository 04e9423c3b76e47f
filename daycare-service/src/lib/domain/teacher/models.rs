use std::fmt;

use uuid::Uuid;

use crate::domain::classroom::models::Classroom;
use crate::domain::common::PersonName;
use crate::domain::teacher::errors::TeacherIdError;

/// Teacher unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeacherId(pub Uuid);

impl TeacherId {
    /// Generate a new random teacher ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a teacher ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TeacherIdError> {
        Uuid::parse_str(s)
            .map(TeacherId)
            .map_err(|e| TeacherIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TeacherId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Teacher aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: PersonName,
    pub last_name: PersonName,
}

/// Teacher with the classrooms they teach, for detail views.
#[derive(Debug, Clone)]
pub struct TeacherDetails {
    pub teacher: Teacher,
    pub classrooms: Vec<Classroom>,
}

/// Command to create a new teacher with validated names.
#[derive(Debug)]
pub struct CreateTeacherCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
}

/// Command to replace a teacher's fields (full update).
#[derive(Debug)]
pub struct UpdateTeacherCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
}

/// Command to patch a teacher; only provided fields change.
#[derive(Debug, Default)]
pub struct PatchTeacherCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
}
