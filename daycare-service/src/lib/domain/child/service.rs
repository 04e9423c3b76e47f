use std::sync::Arc;

use crate::domain::child::errors::ChildError;
use crate::domain::child::models::Child;
use crate::domain::child::models::ChildId;
use crate::domain::child::models::CreateChildCommand;
use crate::domain::child::models::PatchChildCommand;
use crate::domain::child::models::UpdateChildCommand;
use crate::domain::child::ports::ChildRepository;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::ports::ClassroomRepository;

/// Domain service for child enrollment operations.
pub struct ChildService {
    children: Arc<dyn ChildRepository>,
    classrooms: Arc<dyn ClassroomRepository>,
}

impl ChildService {
    pub fn new(
        children: Arc<dyn ChildRepository>,
        classrooms: Arc<dyn ClassroomRepository>,
    ) -> Self {
        Self {
            children,
            classrooms,
        }
    }

    async fn ensure_classroom_exists(
        &self,
        classroom_id: &Option<ClassroomId>,
    ) -> Result<(), ChildError> {
        let Some(classroom_id) = classroom_id else {
            return Ok(());
        };

        self.classrooms
            .find_by_id(classroom_id)
            .await
            .map_err(|e| ChildError::Database(e.to_string()))?
            .map(|_| ())
            .ok_or(ChildError::ClassroomNotFound(classroom_id.to_string()))
    }

    pub async fn list_children(&self) -> Result<Vec<Child>, ChildError> {
        self.children.list_all().await
    }

    pub async fn get_child(&self, id: &ChildId) -> Result<Child, ChildError> {
        self.children
            .find_by_id(id)
            .await?
            .ok_or(ChildError::NotFound(id.to_string()))
    }

    /// List the children enrolled in an existing classroom.
    ///
    /// # Errors
    /// * `ClassroomNotFound` - Classroom does not exist
    /// * `Database` - Lookup failed
    pub async fn children_by_classroom(
        &self,
        classroom_id: &ClassroomId,
    ) -> Result<Vec<Child>, ChildError> {
        self.ensure_classroom_exists(&Some(*classroom_id)).await?;
        self.children.find_by_classroom(classroom_id).await
    }

    /// Enroll a child, optionally into an existing classroom.
    ///
    /// # Errors
    /// * `ClassroomNotFound` - Assigned classroom does not exist
    /// * `Database` - Persistence failed
    pub async fn create_child(&self, command: CreateChildCommand) -> Result<Child, ChildError> {
        self.ensure_classroom_exists(&command.classroom_id).await?;

        let child = Child {
            id: ChildId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            age: command.age,
            classroom_id: command.classroom_id,
        };

        self.children.create(child).await
    }

    /// Replace a child's fields, revalidating the classroom assignment.
    ///
    /// # Errors
    /// * `NotFound` - Child does not exist
    /// * `ClassroomNotFound` - New classroom does not exist
    /// * `Database` - Persistence failed
    pub async fn update_child(
        &self,
        id: &ChildId,
        command: UpdateChildCommand,
    ) -> Result<Child, ChildError> {
        let mut child = self
            .children
            .find_by_id(id)
            .await?
            .ok_or(ChildError::NotFound(id.to_string()))?;

        self.ensure_classroom_exists(&command.classroom_id).await?;

        child.first_name = command.first_name;
        child.last_name = command.last_name;
        child.age = command.age;
        child.classroom_id = command.classroom_id;

        self.children.update(child).await
    }

    /// Apply a partial update; absent fields keep their value.
    ///
    /// # Errors
    /// * `NotFound` - Child does not exist
    /// * `ClassroomNotFound` - New classroom does not exist
    /// * `Database` - Persistence failed
    pub async fn patch_child(
        &self,
        id: &ChildId,
        command: PatchChildCommand,
    ) -> Result<Child, ChildError> {
        let mut child = self
            .children
            .find_by_id(id)
            .await?
            .ok_or(ChildError::NotFound(id.to_string()))?;

        if let Some(classroom_id) = command.classroom_id {
            self.ensure_classroom_exists(&Some(classroom_id)).await?;
            child.classroom_id = Some(classroom_id);
        }
        if let Some(first_name) = command.first_name {
            child.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            child.last_name = last_name;
        }
        if let Some(age) = command.age {
            child.age = age;
        }

        self.children.update(child).await
    }

    pub async fn delete_child(&self, id: &ChildId) -> Result<(), ChildError> {
        self.children.delete(id).await
    }
}
