//! Repository for `college_achievements` and `student_achievements`.
//!
//! The two tables share one shape, so every method takes the
//! [`AchievementKind`] selecting the table.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::{
    Achievement, AchievementFilter, AchievementKind, CreateAchievement, UpdateAchievement,
};

const COLUMNS: &str = "a.id, a.image, a.alt, a.unique_id, a.department_id, a.course_id, a.date, \
     a.description, a.relevant_link, a.created_at, a.updated_at";

const SEARCH_COLUMNS: &[&str] = &["a.description", "d.name", "c.name"];

pub struct AchievementRepo;

impl AchievementRepo {
    pub async fn create(
        pool: &PgPool,
        kind: AchievementKind,
        input: &CreateAchievement,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} AS a (image, alt, department_id, course_id, date, description, relevant_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}",
            kind.table_name()
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(input.department_id)
            .bind(input.course_id)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.relevant_link)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        kind: AchievementKind,
        id: DbId,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} a WHERE a.id = $1",
            kind.table_name()
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List achievements, newest first. `search` also matches the names of
    /// the linked department and course.
    pub async fn list(
        pool: &PgPool,
        kind: AchievementKind,
        filter: &AchievementFilter,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("a.department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.course_id.is_some() {
            conditions.push(format!("a.course_id = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(SEARCH_COLUMNS, bind_idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {COLUMNS} FROM {} a
             JOIN departments d ON d.id = a.department_id
             LEFT JOIN courses c ON c.id = a.course_id
             {where_clause}
             ORDER BY a.date DESC, a.id DESC",
            kind.table_name()
        );

        let mut q = sqlx::query_as::<_, Achievement>(&query);
        if let Some(id) = filter.department_id {
            q = q.bind(id);
        }
        if let Some(id) = filter.course_id {
            q = q.bind(id);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        kind: AchievementKind,
        id: DbId,
        input: &UpdateAchievement,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!(
            "UPDATE {} AS a SET
                image = COALESCE($2, image),
                alt = COALESCE($3, alt),
                department_id = COALESCE($4, department_id),
                course_id = COALESCE($5, course_id),
                date = COALESCE($6, date),
                description = COALESCE($7, description),
                relevant_link = COALESCE($8, relevant_link)
             WHERE a.id = $1
             RETURNING {COLUMNS}",
            kind.table_name()
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(input.department_id)
            .bind(input.course_id)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.relevant_link)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, kind: AchievementKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table_name());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
