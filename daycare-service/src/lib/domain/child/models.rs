use std::fmt;

use uuid::Uuid;

use crate::domain::child::errors::ChildAgeError;
use crate::domain::child::errors::ChildIdError;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::common::PersonName;

/// Child unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(pub Uuid);

impl ChildId {
    /// Generate a new random child ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a child ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ChildIdError> {
        Uuid::parse_str(s)
            .map(ChildId)
            .map_err(|e| ChildIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ChildId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Child age value type, limited to the ages the daycare accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildAge(i32);

impl ChildAge {
    const MAX_AGE: i32 = 12;

    /// Create a validated age.
    ///
    /// # Errors
    /// * `OutOfRange` - Age is negative or above 12
    pub fn new(age: i32) -> Result<Self, ChildAgeError> {
        if !(0..=Self::MAX_AGE).contains(&age) {
            return Err(ChildAgeError::OutOfRange {
                max: Self::MAX_AGE,
                actual: age,
            });
        }
        Ok(Self(age))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Child aggregate entity.
///
/// A child may be unassigned while waiting for a classroom placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub id: ChildId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub age: ChildAge,
    pub classroom_id: Option<ClassroomId>,
}

/// Command to enroll a new child.
#[derive(Debug)]
pub struct CreateChildCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub age: ChildAge,
    pub classroom_id: Option<ClassroomId>,
}

/// Command to replace a child's fields (full update).
#[derive(Debug)]
pub struct UpdateChildCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub age: ChildAge,
    pub classroom_id: Option<ClassroomId>,
}

/// Command to patch a child; only provided fields change.
#[derive(Debug, Default)]
pub struct PatchChildCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub age: Option<ChildAge>,
    pub classroom_id: Option<ClassroomId>,
}
