use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::models::ClassroomName;
use crate::domain::classroom::ports::ClassroomRepository;
use crate::domain::teacher::models::TeacherId;

pub struct PostgresClassroomRepository {
    pool: PgPool,
}

impl PostgresClassroomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn classroom_from_row(row: &PgRow) -> Result<Classroom, ClassroomError> {
    let name: String = row
        .try_get("name")
        .map_err(|e| ClassroomError::Database(e.to_string()))?;
    let teacher_id: Option<Uuid> = row
        .try_get("teacher_id")
        .map_err(|e| ClassroomError::Database(e.to_string()))?;

    Ok(Classroom {
        id: ClassroomId(
            row.try_get("id")
                .map_err(|e| ClassroomError::Database(e.to_string()))?,
        ),
        name: ClassroomName::new(name)?,
        teacher_id: teacher_id.map(TeacherId),
    })
}

#[async_trait]
impl ClassroomRepository for PostgresClassroomRepository {
    async fn create(&self, classroom: Classroom) -> Result<Classroom, ClassroomError> {
        sqlx::query(
            r#"
            INSERT INTO classrooms (id, name, teacher_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(classroom.id.0)
        .bind(classroom.name.as_str())
        .bind(classroom.teacher_id.map(|id| id.0))
        .execute(&self.pool)
        .await
        .map_err(|e| ClassroomError::Database(e.to_string()))?;

        Ok(classroom)
    }

    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, ClassroomError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, teacher_id
            FROM classrooms
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClassroomError::Database(e.to_string()))?;

        row.as_ref().map(classroom_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Classroom>, ClassroomError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, teacher_id
            FROM classrooms
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClassroomError::Database(e.to_string()))?;

        rows.iter().map(classroom_from_row).collect()
    }

    async fn find_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> Result<Vec<Classroom>, ClassroomError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, teacher_id
            FROM classrooms
            WHERE teacher_id = $1
            ORDER BY name
            "#,
        )
        .bind(teacher_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClassroomError::Database(e.to_string()))?;

        rows.iter().map(classroom_from_row).collect()
    }

    async fn update(&self, classroom: Classroom) -> Result<Classroom, ClassroomError> {
        let result = sqlx::query(
            r#"
            UPDATE classrooms
            SET name = $2, teacher_id = $3
            WHERE id = $1
            "#,
        )
        .bind(classroom.id.0)
        .bind(classroom.name.as_str())
        .bind(classroom.teacher_id.map(|id| id.0))
        .execute(&self.pool)
        .await
        .map_err(|e| ClassroomError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ClassroomError::NotFound(classroom.id.to_string()));
        }

        Ok(classroom)
    }

    async fn delete(&self, id: &ClassroomId) -> Result<(), ClassroomError> {
        let result = sqlx::query("DELETE FROM classrooms WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ClassroomError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ClassroomError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
