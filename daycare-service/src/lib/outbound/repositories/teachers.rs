use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::common::PersonName;
use crate::domain::teacher::errors::TeacherError;
use crate::domain::teacher::models::Teacher;
use crate::domain::teacher::models::TeacherId;
use crate::domain::teacher::ports::TeacherRepository;

pub struct PostgresTeacherRepository {
    pool: PgPool,
}

impl PostgresTeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn teacher_from_row(row: &PgRow) -> Result<Teacher, TeacherError> {
    let first_name: String = row
        .try_get("first_name")
        .map_err(|e| TeacherError::Database(e.to_string()))?;
    let last_name: String = row
        .try_get("last_name")
        .map_err(|e| TeacherError::Database(e.to_string()))?;

    Ok(Teacher {
        id: TeacherId(
            row.try_get("id")
                .map_err(|e| TeacherError::Database(e.to_string()))?,
        ),
        first_name: PersonName::new(first_name)?,
        last_name: PersonName::new(last_name)?,
    })
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    async fn create(&self, teacher: Teacher) -> Result<Teacher, TeacherError> {
        sqlx::query(
            r#"
            INSERT INTO teachers (id, first_name, last_name)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(teacher.id.0)
        .bind(teacher.first_name.as_str())
        .bind(teacher.last_name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TeacherError::Database(e.to_string()))?;

        Ok(teacher)
    }

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, TeacherError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name
            FROM teachers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TeacherError::Database(e.to_string()))?;

        row.as_ref().map(teacher_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Teacher>, TeacherError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name
            FROM teachers
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TeacherError::Database(e.to_string()))?;

        rows.iter().map(teacher_from_row).collect()
    }

    async fn update(&self, teacher: Teacher) -> Result<Teacher, TeacherError> {
        let result = sqlx::query(
            r#"
            UPDATE teachers
            SET first_name = $2, last_name = $3
            WHERE id = $1
            "#,
        )
        .bind(teacher.id.0)
        .bind(teacher.first_name.as_str())
        .bind(teacher.last_name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TeacherError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TeacherError::NotFound(teacher.id.to_string()));
        }

        Ok(teacher)
    }

    async fn delete(&self, id: &TeacherId) -> Result<(), TeacherError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TeacherError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TeacherError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
