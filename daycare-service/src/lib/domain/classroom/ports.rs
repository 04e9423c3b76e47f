use async_trait::async_trait;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::teacher::models::TeacherId;

/// Persistence operations for the classroom aggregate.
#[async_trait]
pub trait ClassroomRepository: Send + Sync + 'static {
    /// Persist a new classroom.
    ///
    /// # Errors
    /// * `Database` - Persistence failed
    async fn create(&self, classroom: Classroom) -> Result<Classroom, ClassroomError>;

    /// Retrieve a classroom by identifier, `None` if absent.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, ClassroomError>;

    /// Retrieve all classrooms.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn list_all(&self) -> Result<Vec<Classroom>, ClassroomError>;

    /// Retrieve the classrooms assigned to a teacher.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_teacher(&self, teacher_id: &TeacherId)
        -> Result<Vec<Classroom>, ClassroomError>;

    /// Replace an existing classroom's fields.
    ///
    /// # Errors
    /// * `NotFound` - Classroom does not exist
    /// * `Database` - Persistence failed
    async fn update(&self, classroom: Classroom) -> Result<Classroom, ClassroomError>;

    /// Remove a classroom; enrolled children lose their assignment.
    ///
    /// # Errors
    /// * `NotFound` - Classroom does not exist
    /// * `Database` - Persistence failed
    async fn delete(&self, id: &ClassroomId) -> Result<(), ClassroomError>;
}
