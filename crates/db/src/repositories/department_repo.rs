//! Repository for the `departments` table.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};
use crate::models::seo::SEO_COLUMNS;

const BASE_COLUMNS: &str = "id, name, slug, ug, pg, phd, about, vision, mission, \
     programs_image, programs_image_alt, facilities_overview, contact_id, created_at, updated_at";

/// Columns searched by `?search=`.
const SEARCH_COLUMNS: &[&str] = &["name", "about"];

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department under an already-resolved unique `slug`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartment,
        slug: &str,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments
                (name, slug, ug, pg, phd, about, vision, mission, programs_image,
                 programs_image_alt, facilities_overview, contact_id)
             VALUES ($1, $2, COALESCE($3, false), COALESCE($4, false), COALESCE($5, false),
                     $6, $7, $8, $9, $10, $11, $12)
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(slug)
            .bind(input.ug)
            .bind(input.pg)
            .bind(input.phd)
            .bind(&input.about)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.programs_image)
            .bind(&input.programs_image_alt)
            .bind(&input.facilities_overview)
            .bind(input.contact_id)
            .fetch_one(pool)
            .await
    }

    /// Find a department by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a department by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Department>, sqlx::Error> {
        let query =
            format!("SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM departments WHERE slug = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Whether `slug` is taken by a department other than `exclude_id`.
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM departments WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(found)
    }

    /// List departments ordered by name, narrowed by the optional filters.
    pub async fn list(
        pool: &PgPool,
        filter: &DepartmentFilter,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(SEARCH_COLUMNS, bind_idx));
            bind_idx += 1;
        }
        for (column, value) in [("ug", filter.ug), ("pg", filter.pg), ("phd", filter.phd)] {
            if value.is_some() {
                conditions.push(format!("{column} = ${bind_idx}"));
                bind_idx += 1;
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM departments {where_clause} ORDER BY name ASC, id ASC"
        );

        let mut q = sqlx::query_as::<_, Department>(&query);
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        for value in [filter.ug, filter.pg, filter.phd].into_iter().flatten() {
            q = q.bind(value);
        }
        q.fetch_all(pool).await
    }

    /// Update a department. Only non-`None` fields in `input` are applied;
    /// `slug` is the already-resolved replacement slug, if any.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
        slug: Option<&str>,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                ug = COALESCE($4, ug),
                pg = COALESCE($5, pg),
                phd = COALESCE($6, phd),
                about = COALESCE($7, about),
                vision = COALESCE($8, vision),
                mission = COALESCE($9, mission),
                programs_image = COALESCE($10, programs_image),
                programs_image_alt = COALESCE($11, programs_image_alt),
                facilities_overview = COALESCE($12, facilities_overview),
                contact_id = COALESCE($13, contact_id)
             WHERE id = $1
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(slug)
            .bind(input.ug)
            .bind(input.pg)
            .bind(input.phd)
            .bind(&input.about)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.programs_image)
            .bind(&input.programs_image_alt)
            .bind(&input.facilities_overview)
            .bind(input.contact_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a department and, by cascade, all of its sections.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
