use async_trait::async_trait;

use crate::domain::teacher::errors::TeacherError;
use crate::domain::teacher::models::Teacher;
use crate::domain::teacher::models::TeacherId;

/// Persistence operations for the teacher aggregate.
#[async_trait]
pub trait TeacherRepository: Send + Sync + 'static {
    /// Persist a new teacher.
    ///
    /// # Errors
    /// * `Database` - Persistence failed
    async fn create(&self, teacher: Teacher) -> Result<Teacher, TeacherError>;

    /// Retrieve a teacher by identifier, `None` if absent.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, TeacherError>;

    /// Retrieve all teachers.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn list_all(&self) -> Result<Vec<Teacher>, TeacherError>;

    /// Replace an existing teacher's fields.
    ///
    /// # Errors
    /// * `NotFound` - Teacher does not exist
    /// * `Database` - Persistence failed
    async fn update(&self, teacher: Teacher) -> Result<Teacher, TeacherError>;

    /// Remove a teacher; classrooms they taught lose their assignment.
    ///
    /// # Errors
    /// * `NotFound` - Teacher does not exist
    /// * `Database` - Persistence failed
    async fn delete(&self, id: &TeacherId) -> Result<(), TeacherError>;
}
