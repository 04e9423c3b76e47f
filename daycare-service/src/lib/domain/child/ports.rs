use async_trait::async_trait;

use crate::domain::child::errors::ChildError;
use crate::domain::child::models::Child;
use crate::domain::child::models::ChildId;
use crate::domain::classroom::models::ClassroomId;

/// Persistence operations for the child aggregate.
#[async_trait]
pub trait ChildRepository: Send + Sync + 'static {
    /// Persist a new child.
    ///
    /// # Errors
    /// * `Database` - Persistence failed
    async fn create(&self, child: Child) -> Result<Child, ChildError>;

    /// Retrieve a child by identifier, `None` if absent.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_id(&self, id: &ChildId) -> Result<Option<Child>, ChildError>;

    /// Retrieve all children.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn list_all(&self) -> Result<Vec<Child>, ChildError>;

    /// Retrieve the children enrolled in a classroom.
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_classroom(&self, classroom_id: &ClassroomId)
        -> Result<Vec<Child>, ChildError>;

    /// Replace an existing child's fields.
    ///
    /// # Errors
    /// * `NotFound` - Child does not exist
    /// * `Database` - Persistence failed
    async fn update(&self, child: Child) -> Result<Child, ChildError>;

    /// Remove a child.
    ///
    /// # Errors
    /// * `NotFound` - Child does not exist
    /// * `Database` - Persistence failed
    async fn delete(&self, id: &ChildId) -> Result<(), ChildError>;
}
