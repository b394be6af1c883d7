//! Public form submissions: contact, career application and grievance.
//!
//! Submissions are written once by the public API; only the admin inbox
//! flags (`is_mail_sent`, grievance `status`) change afterwards.

use campus_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactForm {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub is_mail_sent: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactForm {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub phone: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactFormFilter {
    pub is_mail_sent: Option<bool>,
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Career application
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareerForm {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub current_opening: String,
    pub resume: Option<String>,
    pub qualification: String,
    pub experience: String,
    pub department_id: Option<DbId>,
    pub publishing_date: Date,
    pub age: i32,
    pub gender: String,
    pub date_of_birth: Date,
    pub marital_status: String,
    pub heard_from: String,
    pub languages_known: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCareerForm {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub phone: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub current_opening: Option<String>,
    /// URL of a resume previously uploaded through the media endpoint.
    pub resume: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub qualification: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub experience: Option<String>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    #[validate(required)]
    pub publishing_date: Option<Date>,
    #[validate(required, range(min = 1, max = 150, message = "must be between 1 and 150"))]
    pub age: Option<i32>,
    #[validate(required, custom(function = "campus_core::choices::validate_gender"))]
    pub gender: Option<String>,
    #[validate(required)]
    pub date_of_birth: Option<Date>,
    #[validate(
        required,
        custom(function = "campus_core::choices::validate_marital_status")
    )]
    pub marital_status: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heard_from: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub languages_known: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CareerFormFilter {
    pub department_id: Option<DbId>,
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Grievance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GrievanceForm {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub department_id: Option<DbId>,
    pub committee_category_id: Option<DbId>,
    pub faculty_id: Option<DbId>,
    pub details: String,
    pub status: String,
    pub reference_number: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGrievanceForm {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub phone: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    #[validate(required)]
    pub committee_category_id: Option<DbId>,
    #[validate(required)]
    pub faculty_id: Option<DbId>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub details: Option<String>,
}

/// Body of `PUT /admin/grievances/{id}/status`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGrievanceStatus {
    #[validate(
        required,
        custom(function = "campus_core::choices::validate_grievance_status")
    )]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GrievanceFilter {
    pub department_id: Option<DbId>,
    pub committee_category_id: Option<DbId>,
    pub faculty_id: Option<DbId>,
    pub status: Option<String>,
    pub search: Option<String>,
}
