use std::sync::Arc;

use crate::domain::classroom::ports::ClassroomRepository;
use crate::domain::teacher::errors::TeacherError;
use crate::domain::teacher::models::CreateTeacherCommand;
use crate::domain::teacher::models::PatchTeacherCommand;
use crate::domain::teacher::models::Teacher;
use crate::domain::teacher::models::TeacherDetails;
use crate::domain::teacher::models::TeacherId;
use crate::domain::teacher::models::UpdateTeacherCommand;
use crate::domain::teacher::ports::TeacherRepository;

/// Domain service for teacher operations.
pub struct TeacherService {
    teachers: Arc<dyn TeacherRepository>,
    classrooms: Arc<dyn ClassroomRepository>,
}

impl TeacherService {
    pub fn new(
        teachers: Arc<dyn TeacherRepository>,
        classrooms: Arc<dyn ClassroomRepository>,
    ) -> Self {
        Self {
            teachers,
            classrooms,
        }
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, TeacherError> {
        self.teachers.list_all().await
    }

    /// Retrieve a teacher with the classrooms they teach.
    ///
    /// # Errors
    /// * `NotFound` - Teacher does not exist
    /// * `Database` - Lookup failed
    pub async fn get_teacher(&self, id: &TeacherId) -> Result<TeacherDetails, TeacherError> {
        let teacher = self
            .teachers
            .find_by_id(id)
            .await?
            .ok_or(TeacherError::NotFound(id.to_string()))?;

        let classrooms = self
            .classrooms
            .find_by_teacher(id)
            .await
            .map_err(|e| TeacherError::Database(e.to_string()))?;

        Ok(TeacherDetails {
            teacher,
            classrooms,
        })
    }

    pub async fn create_teacher(
        &self,
        command: CreateTeacherCommand,
    ) -> Result<Teacher, TeacherError> {
        let teacher = Teacher {
            id: TeacherId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
        };

        self.teachers.create(teacher).await
    }

    /// Replace all of a teacher's fields.
    ///
    /// # Errors
    /// * `NotFound` - Teacher does not exist
    /// * `Database` - Persistence failed
    pub async fn update_teacher(
        &self,
        id: &TeacherId,
        command: UpdateTeacherCommand,
    ) -> Result<Teacher, TeacherError> {
        let mut teacher = self
            .teachers
            .find_by_id(id)
            .await?
            .ok_or(TeacherError::NotFound(id.to_string()))?;

        teacher.first_name = command.first_name;
        teacher.last_name = command.last_name;

        self.teachers.update(teacher).await
    }

    /// Apply a partial update; absent fields keep their value.
    ///
    /// # Errors
    /// * `NotFound` - Teacher does not exist
    /// * `Database` - Persistence failed
    pub async fn patch_teacher(
        &self,
        id: &TeacherId,
        command: PatchTeacherCommand,
    ) -> Result<Teacher, TeacherError> {
        let mut teacher = self
            .teachers
            .find_by_id(id)
            .await?
            .ok_or(TeacherError::NotFound(id.to_string()))?;

        if let Some(first_name) = command.first_name {
            teacher.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            teacher.last_name = last_name;
        }

        self.teachers.update(teacher).await
    }

    pub async fn delete_teacher(&self, id: &TeacherId) -> Result<(), TeacherError> {
        self.teachers.delete(id).await
    }
}
