use std::fmt;

use thiserror::Error;

/// Person name value type shared by teachers and children.
///
/// Trimmed, non-empty, at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 64;

    /// Create a validated person name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 64 characters
    pub fn new(name: String) -> Result<Self, PersonNameError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(PersonNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(PersonNameError::TooLong {
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

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonNameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = PersonName::new("Maria".to_string()).unwrap();
        assert_eq!(name.as_str(), "Maria");
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = PersonName::new("  Maria  ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Maria");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            PersonName::new("   ".to_string()),
            Err(PersonNameError::Empty)
        );
    }

    #[test]
    fn test_overlong_name_rejected() {
        let result = PersonName::new("x".repeat(65));
        assert!(matches!(result, Err(PersonNameError::TooLong { .. })));
    }
}
