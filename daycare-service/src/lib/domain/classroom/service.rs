use std::sync::Arc;

use crate::domain::child::models::ChildId;
use crate::domain::child::ports::ChildRepository;
use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomDetails;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::models::CreateClassroomCommand;
use crate::domain::classroom::models::PatchClassroomCommand;
use crate::domain::classroom::models::UpdateClassroomCommand;
use crate::domain::classroom::ports::ClassroomRepository;
use crate::domain::teacher::models::TeacherId;
use crate::domain::teacher::ports::TeacherRepository;

/// Domain service for classroom operations.
///
/// Teacher assignment is validated against the teacher repository before
/// persisting, so a classroom never points at a teacher that does not
/// exist at write time.
pub struct ClassroomService {
    classrooms: Arc<dyn ClassroomRepository>,
    teachers: Arc<dyn TeacherRepository>,
    children: Arc<dyn ChildRepository>,
}

impl ClassroomService {
    pub fn new(
        classrooms: Arc<dyn ClassroomRepository>,
        teachers: Arc<dyn TeacherRepository>,
        children: Arc<dyn ChildRepository>,
    ) -> Self {
        Self {
            classrooms,
            teachers,
            children,
        }
    }

    async fn ensure_teacher_exists(
        &self,
        teacher_id: &Option<TeacherId>,
    ) -> Result<(), ClassroomError> {
        let Some(teacher_id) = teacher_id else {
            return Ok(());
        };

        self.teachers
            .find_by_id(teacher_id)
            .await
            .map_err(|e| ClassroomError::Database(e.to_string()))?
            .map(|_| ())
            .ok_or(ClassroomError::TeacherNotFound(teacher_id.to_string()))
    }

    pub async fn list_classrooms(&self) -> Result<Vec<Classroom>, ClassroomError> {
        self.classrooms.list_all().await
    }

    /// Retrieve a classroom with its teacher and enrolled children.
    ///
    /// # Errors
    /// * `NotFound` - Classroom does not exist
    /// * `Database` - Lookup failed
    pub async fn get_classroom(&self, id: &ClassroomId) -> Result<ClassroomDetails, ClassroomError> {
        let classroom = self
            .classrooms
            .find_by_id(id)
            .await?
            .ok_or(ClassroomError::NotFound(id.to_string()))?;

        let teacher = match &classroom.teacher_id {
            Some(teacher_id) => self
                .teachers
                .find_by_id(teacher_id)
                .await
                .map_err(|e| ClassroomError::Database(e.to_string()))?,
            None => None,
        };

        let children = self
            .children
            .find_by_classroom(id)
            .await
            .map_err(|e| ClassroomError::Database(e.to_string()))?;

        Ok(ClassroomDetails {
            classroom,
            teacher,
            children,
        })
    }

    /// List the classrooms a child is enrolled in.
    ///
    /// An unknown child and a child without a placement both surface as
    /// `NoneForChild`; enrollment is the only relation consulted.
    ///
    /// # Errors
    /// * `NoneForChild` - No classroom holds this child
    /// * `Database` - Lookup failed
    pub async fn classrooms_by_child(
        &self,
        child_id: &ChildId,
    ) -> Result<Vec<Classroom>, ClassroomError> {
        let child = self
            .children
            .find_by_id(child_id)
            .await
            .map_err(|e| ClassroomError::Database(e.to_string()))?
            .ok_or(ClassroomError::NoneForChild(child_id.to_string()))?;

        let classroom = match child.classroom_id {
            Some(classroom_id) => self.classrooms.find_by_id(&classroom_id).await?,
            None => None,
        };

        classroom
            .map(|classroom| vec![classroom])
            .ok_or(ClassroomError::NoneForChild(child_id.to_string()))
    }

    /// Create a classroom, optionally assigned to an existing teacher.
    ///
    /// # Errors
    /// * `TeacherNotFound` - Assigned teacher does not exist
    /// * `Database` - Persistence failed
    pub async fn create_classroom(
        &self,
        command: CreateClassroomCommand,
    ) -> Result<Classroom, ClassroomError> {
        self.ensure_teacher_exists(&command.teacher_id).await?;

        let classroom = Classroom {
            id: ClassroomId::new(),
            name: command.name,
            teacher_id: command.teacher_id,
        };

        self.classrooms.create(classroom).await
    }

    /// Replace a classroom's name and teacher assignment.
    ///
    /// # Errors
    /// * `NotFound` - Classroom does not exist
    /// * `TeacherNotFound` - New teacher does not exist
    /// * `Database` - Persistence failed
    pub async fn update_classroom(
        &self,
        id: &ClassroomId,
        command: UpdateClassroomCommand,
    ) -> Result<Classroom, ClassroomError> {
        let mut classroom = self
            .classrooms
            .find_by_id(id)
            .await?
            .ok_or(ClassroomError::NotFound(id.to_string()))?;

        self.ensure_teacher_exists(&command.teacher_id).await?;

        classroom.name = command.name;
        classroom.teacher_id = command.teacher_id;

        self.classrooms.update(classroom).await
    }

    /// Apply a partial update; absent fields keep their value.
    ///
    /// # Errors
    /// * `NotFound` - Classroom does not exist
    /// * `TeacherNotFound` - New teacher does not exist
    /// * `Database` - Persistence failed
    pub async fn patch_classroom(
        &self,
        id: &ClassroomId,
        command: PatchClassroomCommand,
    ) -> Result<Classroom, ClassroomError> {
        let mut classroom = self
            .classrooms
            .find_by_id(id)
            .await?
            .ok_or(ClassroomError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            classroom.name = name;
        }
        if let Some(teacher_id) = command.teacher_id {
            self.ensure_teacher_exists(&Some(teacher_id)).await?;
            classroom.teacher_id = Some(teacher_id);
        }

        self.classrooms.update(classroom).await
    }

    pub async fn delete_classroom(&self, id: &ClassroomId) -> Result<(), ClassroomError> {
        self.classrooms.delete(id).await
    }
}
