//! Repository for the `department_contacts` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{
    CreateDepartmentContact, DepartmentContact, UpdateDepartmentContact,
};

const COLUMNS: &str =
    "id, email, phone, name, position, image, alt, heading, created_at, updated_at";

pub struct DepartmentContactRepo;

impl DepartmentContactRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartmentContact,
    ) -> Result<DepartmentContact, sqlx::Error> {
        let query = format!(
            "INSERT INTO department_contacts (name, email, phone, position, image, alt, heading)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DepartmentContact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.position)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(&input.heading)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DepartmentContact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM department_contacts WHERE id = $1");
        sqlx::query_as::<_, DepartmentContact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<DepartmentContact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM department_contacts ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, DepartmentContact>(&query)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartmentContact,
    ) -> Result<Option<DepartmentContact>, sqlx::Error> {
        let query = format!(
            "UPDATE department_contacts SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                position = COALESCE($5, position),
                image = COALESCE($6, image),
                alt = COALESCE($7, alt),
                heading = COALESCE($8, heading)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DepartmentContact>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.position)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(&input.heading)
            .fetch_optional(pool)
            .await
    }

    /// Departments pointing at the contact keep existing with `contact_id`
    /// cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM department_contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
