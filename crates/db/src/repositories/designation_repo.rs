//! Repository for the `designations` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::faculty::{CreateDesignation, Designation, UpdateDesignation};

const COLUMNS: &str = "id, name, unique_id, created_at, updated_at";

pub struct DesignationRepo;

impl DesignationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDesignation,
    ) -> Result<Designation, sqlx::Error> {
        let query = format!("INSERT INTO designations (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Designation>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Designation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designations WHERE id = $1");
        sqlx::query_as::<_, Designation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Designation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designations ORDER BY name ASC");
        sqlx::query_as::<_, Designation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Number of faculty members holding the designation.
    pub async fn faculty_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM faculty WHERE designation_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDesignation,
    ) -> Result<Option<Designation>, sqlx::Error> {
        let query = format!(
            "UPDATE designations SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Designation>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    /// Deleting a designation removes the faculty holding it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM designations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
