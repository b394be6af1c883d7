//! Repository for the `faculty` table and its banners.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::faculty::{
    CreateFaculty, CreateFacultyBanner, Faculty, FacultyBanner, FacultyFilter, UpdateFaculty,
    UpdateFacultyBanner,
};
use crate::models::seo::SEO_COLUMNS;
use crate::repositories::section::{Section, SectionQuery};

const BASE_COLUMNS: &str = "id, name, alt, image, designation_id, department_id, mail_id, \
     phone_number, link, content, qualification, bio, publication, awards, workshop, \
     work_experience, projects, created_at, updated_at";

const SEARCH_COLUMNS: &[&str] = &["name", "qualification", "bio"];

/// Provides CRUD and lookup operations for faculty profiles.
pub struct FacultyRepo;

impl FacultyRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaculty) -> Result<Faculty, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculty
                (name, alt, image, designation_id, department_id, mail_id, phone_number, link,
                 content, qualification, bio, publication, awards, workshop, work_experience,
                 projects)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.alt)
            .bind(&input.image)
            .bind(input.designation_id)
            .bind(input.department_id)
            .bind(&input.mail_id)
            .bind(&input.phone_number)
            .bind(&input.link)
            .bind(&input.content)
            .bind(&input.qualification)
            .bind(&input.bio)
            .bind(&input.publication)
            .bind(&input.awards)
            .bind(&input.workshop)
            .bind(&input.work_experience)
            .bind(&input.projects)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM faculty WHERE id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive exact name match. Names are unique per department,
    /// so the first match by id wins when several departments share one.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!(
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM faculty
             WHERE LOWER(name) = LOWER($1) ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(name.trim())
            .fetch_optional(pool)
            .await
    }

    /// List faculty ordered by name, narrowed by the optional filters.
    pub async fn list(pool: &PgPool, filter: &FacultyFilter) -> Result<Vec<Faculty>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.designation_id.is_some() {
            conditions.push(format!("designation_id = ${bind_idx}"));
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
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM faculty {where_clause} ORDER BY name ASC, id ASC"
        );

        let mut q = sqlx::query_as::<_, Faculty>(&query);
        if let Some(id) = filter.department_id {
            q = q.bind(id);
        }
        if let Some(id) = filter.designation_id {
            q = q.bind(id);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaculty,
    ) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!(
            "UPDATE faculty SET
                name = COALESCE($2, name),
                alt = COALESCE($3, alt),
                image = COALESCE($4, image),
                designation_id = COALESCE($5, designation_id),
                department_id = COALESCE($6, department_id),
                mail_id = COALESCE($7, mail_id),
                phone_number = COALESCE($8, phone_number),
                link = COALESCE($9, link),
                content = COALESCE($10, content),
                qualification = COALESCE($11, qualification),
                bio = COALESCE($12, bio),
                publication = COALESCE($13, publication),
                awards = COALESCE($14, awards),
                workshop = COALESCE($15, workshop),
                work_experience = COALESCE($16, work_experience),
                projects = COALESCE($17, projects)
             WHERE id = $1
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.alt)
            .bind(&input.image)
            .bind(input.designation_id)
            .bind(input.department_id)
            .bind(&input.mail_id)
            .bind(&input.phone_number)
            .bind(&input.link)
            .bind(&input.content)
            .bind(&input.qualification)
            .bind(&input.bio)
            .bind(&input.publication)
            .bind(&input.awards)
            .bind(&input.workshop)
            .bind(&input.work_experience)
            .bind(&input.projects)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faculty WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl Section for FacultyBanner {
    type Create = CreateFacultyBanner;
    type Update = UpdateFacultyBanner;
    const ENTITY: &'static str = "FacultyBanner";
    const TABLE: &'static str = "faculty_banners";
    const PARENT_COLUMN: &'static str = "faculty_id";
    const PARENT_ENTITY: &'static str = "Faculty";
    const PARENT_TABLE: &'static str = "faculty";
    const COLUMNS: &'static str = "id, faculty_id, image, alt, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "image, alt";
    const INSERT_VALUES: &'static str = "$2, $3";
    const UPDATE_SET: &'static str = "image = COALESCE($3, image), alt = COALESCE($4, alt)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.image).bind(&i.alt)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.image).bind(&i.alt)
    }
}
