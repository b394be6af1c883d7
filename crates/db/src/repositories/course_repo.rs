//! Repository for the `courses` table.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};
use crate::models::seo::SEO_COLUMNS;

const BASE_COLUMNS: &str = "id, name, slug, department_id, ug, pg, phd, about_the_course, \
     vision, mission, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course under an already-resolved unique `slug`.
    pub async fn create(pool: &PgPool, input: &CreateCourse, slug: &str) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (name, slug, department_id, ug, pg, phd, about_the_course, vision, mission)
             VALUES ($1, $2, $3, COALESCE($4, false), COALESCE($5, false), COALESCE($6, false),
                     $7, $8, $9)
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(slug)
            .bind(input.department_id)
            .bind(input.ug)
            .bind(input.pg)
            .bind(input.phd)
            .bind(&input.about_the_course)
            .bind(&input.vision)
            .bind(&input.mission)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM courses WHERE slug = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Whether `slug` is taken by a course other than `exclude_id`.
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM courses WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(found)
    }

    /// List courses ordered by name, optionally narrowed to one department
    /// and to names containing `search`.
    pub async fn list(
        pool: &PgPool,
        department_id: Option<DbId>,
        search: Option<&str>,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if department_id.is_some() {
            conditions.push(format!("department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(search);
        if term.is_some() {
            conditions.push(format!("name ILIKE ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM courses {where_clause} ORDER BY name ASC, id ASC"
        );

        let mut q = sqlx::query_as::<_, Course>(&query);
        if let Some(department_id) = department_id {
            q = q.bind(department_id);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    /// Courses not attached to any department.
    pub async fn list_without_department(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM courses
             WHERE department_id IS NULL ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Courses not yet linked by any program of the given department.
    pub async fn list_available_for_department(
        pool: &PgPool,
        department_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM courses c
             WHERE NOT EXISTS (
                SELECT 1 FROM department_programs p
                WHERE p.department_id = $1 AND p.course_id = c.id
             )
             ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(department_id)
            .fetch_all(pool)
            .await
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
        slug: Option<&str>,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                department_id = COALESCE($4, department_id),
                ug = COALESCE($5, ug),
                pg = COALESCE($6, pg),
                phd = COALESCE($7, phd),
                about_the_course = COALESCE($8, about_the_course),
                vision = COALESCE($9, vision),
                mission = COALESCE($10, mission)
             WHERE id = $1
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(slug)
            .bind(input.department_id)
            .bind(input.ug)
            .bind(input.pg)
            .bind(input.phd)
            .bind(&input.about_the_course)
            .bind(&input.vision)
            .bind(&input.mission)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course and its sections. Programs linking it keep existing
    /// with `course_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
