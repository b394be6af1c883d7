//! Repositories for companies, career openings and career successes.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::career::{
    CareerOpening, CareerOpeningFilter, CareerSuccess, CareerSuccessFilter, Company,
    CompanyFilter, CreateCareerOpening, CreateCareerSuccess, CreateCompany, UpdateCareerOpening,
    UpdateCareerSuccess, UpdateCompany,
};

const COMPANY_COLUMNS: &str = "id, name, image, website, description, created_at, updated_at";

const OPENING_COLUMNS: &str = "id, current_opening, category, opening_position, eligibility, \
     description, apply_link, department_id, is_active, created_at, updated_at";

const SUCCESS_COLUMNS: &str = "id, student_name, image, alt, description, company_id, \
     department_id, batch, unique_id, created_at, updated_at";

fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

pub struct CompanyRepo;

impl CompanyRepo {
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, image, website, description) VALUES ($1, $2, $3, $4)
             RETURNING {COMPANY_COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.image)
            .bind(&input.website)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, filter: &CompanyFilter) -> Result<Vec<Company>, sqlx::Error> {
        let term = search::normalize_term(filter.search.as_deref());
        let mut conditions = Vec::new();
        if term.is_some() {
            conditions.push(search::ilike_any(&["name", "description"], 1));
        }
        let query = format!(
            "SELECT {COMPANY_COLUMNS} FROM companies {} ORDER BY name ASC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, Company>(&query);
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($2, name),
                image = COALESCE($3, image),
                website = COALESCE($4, website),
                description = COALESCE($5, description)
             WHERE id = $1
             RETURNING {COMPANY_COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.image)
            .bind(&input.website)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Success stories referencing the company keep existing with
    /// `company_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Career openings
// ---------------------------------------------------------------------------

pub struct CareerOpeningRepo;

impl CareerOpeningRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCareerOpening,
    ) -> Result<CareerOpening, sqlx::Error> {
        let query = format!(
            "INSERT INTO career_openings
                (current_opening, category, opening_position, eligibility, description,
                 apply_link, department_id, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, true))
             RETURNING {OPENING_COLUMNS}"
        );
        sqlx::query_as::<_, CareerOpening>(&query)
            .bind(&input.current_opening)
            .bind(&input.category)
            .bind(&input.opening_position)
            .bind(&input.eligibility)
            .bind(&input.description)
            .bind(&input.apply_link)
            .bind(input.department_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CareerOpening>, sqlx::Error> {
        let query = format!("SELECT {OPENING_COLUMNS} FROM career_openings WHERE id = $1");
        sqlx::query_as::<_, CareerOpening>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List openings, most recent first.
    pub async fn list(
        pool: &PgPool,
        filter: &CareerOpeningFilter,
    ) -> Result<Vec<CareerOpening>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.is_active.is_some() {
            conditions.push(format!("is_active = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(
                &["current_opening", "opening_position", "description"],
                bind_idx,
            ));
        }

        let query = format!(
            "SELECT {OPENING_COLUMNS} FROM career_openings {} ORDER BY created_at DESC, id DESC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, CareerOpening>(&query);
        if let Some(id) = filter.department_id {
            q = q.bind(id);
        }
        if let Some(category) = &filter.category {
            q = q.bind(category);
        }
        if let Some(flag) = filter.is_active {
            q = q.bind(flag);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCareerOpening,
    ) -> Result<Option<CareerOpening>, sqlx::Error> {
        let query = format!(
            "UPDATE career_openings SET
                current_opening = COALESCE($2, current_opening),
                category = COALESCE($3, category),
                opening_position = COALESCE($4, opening_position),
                eligibility = COALESCE($5, eligibility),
                description = COALESCE($6, description),
                apply_link = COALESCE($7, apply_link),
                department_id = COALESCE($8, department_id),
                is_active = COALESCE($9, is_active)
             WHERE id = $1
             RETURNING {OPENING_COLUMNS}"
        );
        sqlx::query_as::<_, CareerOpening>(&query)
            .bind(id)
            .bind(&input.current_opening)
            .bind(&input.category)
            .bind(&input.opening_position)
            .bind(&input.eligibility)
            .bind(&input.description)
            .bind(&input.apply_link)
            .bind(input.department_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM career_openings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Career successes
// ---------------------------------------------------------------------------

pub struct CareerSuccessRepo;

impl CareerSuccessRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCareerSuccess,
    ) -> Result<CareerSuccess, sqlx::Error> {
        let query = format!(
            "INSERT INTO career_successes
                (student_name, image, alt, description, company_id, department_id, batch)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SUCCESS_COLUMNS}"
        );
        sqlx::query_as::<_, CareerSuccess>(&query)
            .bind(&input.student_name)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(&input.description)
            .bind(input.company_id)
            .bind(input.department_id)
            .bind(input.batch.as_deref().map(str::trim))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CareerSuccess>, sqlx::Error> {
        let query = format!("SELECT {SUCCESS_COLUMNS} FROM career_successes WHERE id = $1");
        sqlx::query_as::<_, CareerSuccess>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List successes, latest batch first.
    pub async fn list(
        pool: &PgPool,
        filter: &CareerSuccessFilter,
    ) -> Result<Vec<CareerSuccess>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        let batch = search::normalize_term(filter.batch.as_deref());
        if batch.is_some() {
            conditions.push(format!("batch ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(&["student_name", "description"], bind_idx));
        }

        let query = format!(
            "SELECT {SUCCESS_COLUMNS} FROM career_successes {}
             ORDER BY batch DESC, student_name ASC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, CareerSuccess>(&query);
        if let Some(id) = filter.department_id {
            q = q.bind(id);
        }
        if let Some(batch) = batch {
            q = q.bind(search::contains_pattern(batch));
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCareerSuccess,
    ) -> Result<Option<CareerSuccess>, sqlx::Error> {
        let query = format!(
            "UPDATE career_successes SET
                student_name = COALESCE($2, student_name),
                image = COALESCE($3, image),
                alt = COALESCE($4, alt),
                description = COALESCE($5, description),
                company_id = COALESCE($6, company_id),
                department_id = COALESCE($7, department_id),
                batch = COALESCE($8, batch)
             WHERE id = $1
             RETURNING {SUCCESS_COLUMNS}"
        );
        sqlx::query_as::<_, CareerSuccess>(&query)
            .bind(id)
            .bind(&input.student_name)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(&input.description)
            .bind(input.company_id)
            .bind(input.department_id)
            .bind(input.batch.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM career_successes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
