use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::child::errors::ChildError;
use crate::domain::child::models::Child;
use crate::domain::child::models::ChildAge;
use crate::domain::child::models::ChildId;
use crate::domain::child::ports::ChildRepository;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::common::PersonName;

pub struct PostgresChildRepository {
    pool: PgPool,
}

impl PostgresChildRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn child_from_row(row: &PgRow) -> Result<Child, ChildError> {
    let first_name: String = row
        .try_get("first_name")
        .map_err(|e| ChildError::Database(e.to_string()))?;
    let last_name: String = row
        .try_get("last_name")
        .map_err(|e| ChildError::Database(e.to_string()))?;
    let age: i32 = row
        .try_get("age")
        .map_err(|e| ChildError::Database(e.to_string()))?;
    let classroom_id: Option<Uuid> = row
        .try_get("classroom_id")
        .map_err(|e| ChildError::Database(e.to_string()))?;

    Ok(Child {
        id: ChildId(
            row.try_get("id")
                .map_err(|e| ChildError::Database(e.to_string()))?,
        ),
        first_name: PersonName::new(first_name)?,
        last_name: PersonName::new(last_name)?,
        age: ChildAge::new(age)?,
        classroom_id: classroom_id.map(ClassroomId),
    })
}

#[async_trait]
impl ChildRepository for PostgresChildRepository {
    async fn create(&self, child: Child) -> Result<Child, ChildError> {
        sqlx::query(
            r#"
            INSERT INTO children (id, first_name, last_name, age, classroom_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(child.id.0)
        .bind(child.first_name.as_str())
        .bind(child.last_name.as_str())
        .bind(child.age.value())
        .bind(child.classroom_id.map(|id| id.0))
        .execute(&self.pool)
        .await
        .map_err(|e| ChildError::Database(e.to_string()))?;

        Ok(child)
    }

    async fn find_by_id(&self, id: &ChildId) -> Result<Option<Child>, ChildError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, age, classroom_id
            FROM children
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ChildError::Database(e.to_string()))?;

        row.as_ref().map(child_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Child>, ChildError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, age, classroom_id
            FROM children
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ChildError::Database(e.to_string()))?;

        rows.iter().map(child_from_row).collect()
    }

    async fn find_by_classroom(
        &self,
        classroom_id: &ClassroomId,
    ) -> Result<Vec<Child>, ChildError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, age, classroom_id
            FROM children
            WHERE classroom_id = $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(classroom_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ChildError::Database(e.to_string()))?;

        rows.iter().map(child_from_row).collect()
    }

    async fn update(&self, child: Child) -> Result<Child, ChildError> {
        let result = sqlx::query(
            r#"
            UPDATE children
            SET first_name = $2, last_name = $3, age = $4, classroom_id = $5
            WHERE id = $1
            "#,
        )
        .bind(child.id.0)
        .bind(child.first_name.as_str())
        .bind(child.last_name.as_str())
        .bind(child.age.value())
        .bind(child.classroom_id.map(|id| id.0))
        .execute(&self.pool)
        .await
        .map_err(|e| ChildError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ChildError::NotFound(child.id.to_string()));
        }

        Ok(child)
    }

    async fn delete(&self, id: &ChildId) -> Result<(), ChildError> {
        let result = sqlx::query("DELETE FROM children WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ChildError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ChildError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
