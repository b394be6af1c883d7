//! Repositories for contact, career and grievance form submissions.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::form::{
    CareerForm, CareerFormFilter, ContactForm, ContactFormFilter, CreateCareerForm,
    CreateContactForm, CreateGrievanceForm, GrievanceFilter, GrievanceForm,
};

const CONTACT_COLUMNS: &str = "id, name, email, phone, message, is_mail_sent, created_at, updated_at";

const CAREER_COLUMNS: &str = "id, name, phone, email, current_opening, resume, qualification, \
     experience, department_id, publishing_date, age, gender, date_of_birth, marital_status, \
     heard_from, languages_known, created_at, updated_at";

const GRIEVANCE_COLUMNS: &str = "id, name, phone, email, department_id, committee_category_id, \
     faculty_id, details, status, reference_number, created_at, updated_at";

fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

pub struct ContactFormRepo;

impl ContactFormRepo {
    pub async fn create(pool: &PgPool, input: &CreateContactForm) -> Result<ContactForm, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_forms (name, email, phone, message) VALUES ($1, $2, $3, $4)
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, ContactForm>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(input.phone.as_deref().map(str::trim))
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Inbox listing, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ContactFormFilter,
    ) -> Result<Vec<ContactForm>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.is_mail_sent.is_some() {
            conditions.push(format!("is_mail_sent = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(&["name", "email", "phone"], bind_idx));
        }

        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_forms {} ORDER BY created_at DESC, id DESC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, ContactForm>(&query);
        if let Some(flag) = filter.is_mail_sent {
            q = q.bind(flag);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    /// Flag a submission as forwarded by mail.
    pub async fn mark_mail_sent(pool: &PgPool, id: DbId) -> Result<Option<ContactForm>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_forms SET is_mail_sent = true WHERE id = $1 RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, ContactForm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Career application
// ---------------------------------------------------------------------------

pub struct CareerFormRepo;

impl CareerFormRepo {
    pub async fn create(pool: &PgPool, input: &CreateCareerForm) -> Result<CareerForm, sqlx::Error> {
        let query = format!(
            "INSERT INTO career_forms
                (name, phone, email, current_opening, resume, qualification, experience,
                 department_id, publishing_date, age, gender, date_of_birth, marital_status,
                 heard_from, languages_known)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {CAREER_COLUMNS}"
        );
        sqlx::query_as::<_, CareerForm>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.phone.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(&input.current_opening)
            .bind(&input.resume)
            .bind(&input.qualification)
            .bind(&input.experience)
            .bind(input.department_id)
            .bind(input.publishing_date)
            .bind(input.age)
            .bind(&input.gender)
            .bind(input.date_of_birth)
            .bind(&input.marital_status)
            .bind(&input.heard_from)
            .bind(&input.languages_known)
            .fetch_one(pool)
            .await
    }

    /// Inbox listing, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &CareerFormFilter,
    ) -> Result<Vec<CareerForm>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(
                &["name", "email", "phone", "current_opening"],
                bind_idx,
            ));
        }

        let query = format!(
            "SELECT {CAREER_COLUMNS} FROM career_forms {} ORDER BY created_at DESC, id DESC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, CareerForm>(&query);
        if let Some(id) = filter.department_id {
            q = q.bind(id);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }
}

// ---------------------------------------------------------------------------
// Grievance
// ---------------------------------------------------------------------------

pub struct GrievanceRepo;

impl GrievanceRepo {
    /// Insert a grievance. `status` starts as `pending` and the reference
    /// number is generated by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGrievanceForm,
    ) -> Result<GrievanceForm, sqlx::Error> {
        let query = format!(
            "INSERT INTO grievance_forms
                (name, phone, email, department_id, committee_category_id, faculty_id, details)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {GRIEVANCE_COLUMNS}"
        );
        sqlx::query_as::<_, GrievanceForm>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.phone.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(input.department_id)
            .bind(input.committee_category_id)
            .bind(input.faculty_id)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_reference(
        pool: &PgPool,
        reference: Uuid,
    ) -> Result<Option<GrievanceForm>, sqlx::Error> {
        let query =
            format!("SELECT {GRIEVANCE_COLUMNS} FROM grievance_forms WHERE reference_number = $1");
        sqlx::query_as::<_, GrievanceForm>(&query)
            .bind(reference)
            .fetch_optional(pool)
            .await
    }

    /// Inbox listing, newest first. `search` also matches the reference
    /// number as text.
    pub async fn list(
        pool: &PgPool,
        filter: &GrievanceFilter,
    ) -> Result<Vec<GrievanceForm>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        for (column, value) in [
            ("department_id", filter.department_id),
            ("committee_category_id", filter.committee_category_id),
            ("faculty_id", filter.faculty_id),
        ] {
            if value.is_some() {
                conditions.push(format!("{column} = ${bind_idx}"));
                bind_idx += 1;
            }
        }
        if filter.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(
                &["name", "email", "phone", "details", "reference_number::text"],
                bind_idx,
            ));
        }

        let query = format!(
            "SELECT {GRIEVANCE_COLUMNS} FROM grievance_forms {} ORDER BY created_at DESC, id DESC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, GrievanceForm>(&query);
        for id in [
            filter.department_id,
            filter.committee_category_id,
            filter.faculty_id,
        ]
        .into_iter()
        .flatten()
        {
            q = q.bind(id);
        }
        if let Some(status) = &filter.status {
            q = q.bind(status);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    /// Set the review status. Any allowed status may follow any other.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<GrievanceForm>, sqlx::Error> {
        let query = format!(
            "UPDATE grievance_forms SET status = $2 WHERE id = $1 RETURNING {GRIEVANCE_COLUMNS}"
        );
        sqlx::query_as::<_, GrievanceForm>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
