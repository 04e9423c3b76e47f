use std::fmt;

use uuid::Uuid;

use crate::domain::child::models::Child;
use crate::domain::classroom::errors::ClassroomIdError;
use crate::domain::classroom::errors::ClassroomNameError;
use crate::domain::teacher::models::Teacher;
use crate::domain::teacher::models::TeacherId;

/// Classroom unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassroomId(pub Uuid);

impl ClassroomId {
    /// Generate a new random classroom ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a classroom ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ClassroomIdError> {
        Uuid::parse_str(s)
            .map(ClassroomId)
            .map_err(|e| ClassroomIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ClassroomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClassroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Classroom name value type
///
/// Trimmed, non-empty, at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomName(String);

impl ClassroomName {
    const MAX_LENGTH: usize = 64;

    /// Create a validated classroom name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 64 characters
    pub fn new(name: String) -> Result<Self, ClassroomNameError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ClassroomNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(ClassroomNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassroomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Classroom aggregate entity.
///
/// A classroom may be temporarily without an assigned teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: ClassroomName,
    pub teacher_id: Option<TeacherId>,
}

/// Classroom with its assigned teacher and enrolled children, for detail
/// views.
#[derive(Debug, Clone)]
pub struct ClassroomDetails {
    pub classroom: Classroom,
    pub teacher: Option<Teacher>,
    pub children: Vec<Child>,
}

/// Command to create a new classroom.
#[derive(Debug)]
pub struct CreateClassroomCommand {
    pub name: ClassroomName,
    pub teacher_id: Option<TeacherId>,
}

/// Command to replace a classroom's fields (full update).
#[derive(Debug)]
pub struct UpdateClassroomCommand {
    pub name: ClassroomName,
    pub teacher_id: Option<TeacherId>,
}

/// Command to patch a classroom; only provided fields change.
#[derive(Debug, Default)]
pub struct PatchClassroomCommand {
    pub name: Option<ClassroomName>,
    pub teacher_id: Option<TeacherId>,
}
