//! Companies, career openings and career success stories.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub image: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompany {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub image: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub description: Option<String>,
}

/// A row from the `career_openings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareerOpening {
    pub id: DbId,
    pub current_opening: String,
    pub category: String,
    pub opening_position: String,
    pub eligibility: String,
    pub description: String,
    pub apply_link: String,
    pub department_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCareerOpening {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub current_opening: Option<String>,
    #[validate(
        required,
        custom(function = "campus_core::choices::validate_career_category")
    )]
    pub category: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub opening_position: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub eligibility: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub description: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub apply_link: Option<String>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCareerOpening {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub current_opening: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_career_category"))]
    pub category: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub opening_position: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub eligibility: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub apply_link: Option<String>,
    pub department_id: Option<DbId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CareerOpeningFilter {
    pub department_id: Option<DbId>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

/// A row from the `career_successes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareerSuccess {
    pub id: DbId,
    pub student_name: String,
    pub image: Option<String>,
    pub alt: String,
    pub description: String,
    pub company_id: Option<DbId>,
    pub department_id: DbId,
    pub batch: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCareerSuccess {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub student_name: Option<String>,
    pub image: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub description: Option<String>,
    pub company_id: Option<DbId>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub batch: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCareerSuccess {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub student_name: Option<String>,
    pub image: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub description: Option<String>,
    pub company_id: Option<DbId>,
    pub department_id: Option<DbId>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub batch: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CareerSuccessFilter {
    pub department_id: Option<DbId>,
    /// Substring of the batch label, e.g. `2023`.
    pub batch: Option<String>,
    pub search: Option<String>,
}

/// Free-text search over companies.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyFilter {
    pub search: Option<String>,
}
