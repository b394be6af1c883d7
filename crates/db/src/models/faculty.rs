//! Designations, faculty profiles and faculty banners.

use campus_core::seo::SeoFields;
use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::seo::SeoColumns;

/// A row from the `designations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Designation {
    pub id: DbId,
    pub name: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDesignation {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDesignation {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
}

/// A row from the `faculty` table. `(name, department_id)` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faculty {
    pub id: DbId,
    pub name: String,
    pub alt: Option<String>,
    pub image: Option<String>,
    pub designation_id: DbId,
    pub department_id: DbId,
    pub mail_id: Option<String>,
    pub phone_number: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub qualification: Option<String>,
    pub bio: Option<String>,
    pub publication: Option<String>,
    pub awards: Option<String>,
    pub workshop: Option<String>,
    pub work_experience: Option<String>,
    pub projects: Option<String>,
    #[sqlx(flatten)]
    pub seo: SeoColumns,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFaculty {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub alt: Option<String>,
    pub image: Option<String>,
    #[validate(required)]
    pub designation_id: Option<DbId>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    #[validate(email)]
    pub mail_id: Option<String>,
    pub phone_number: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub qualification: Option<String>,
    pub bio: Option<String>,
    pub publication: Option<String>,
    pub awards: Option<String>,
    pub workshop: Option<String>,
    pub work_experience: Option<String>,
    pub projects: Option<String>,
    pub seo: Option<SeoFields>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateFaculty {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub alt: Option<String>,
    pub image: Option<String>,
    pub designation_id: Option<DbId>,
    pub department_id: Option<DbId>,
    #[validate(email)]
    pub mail_id: Option<String>,
    pub phone_number: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub qualification: Option<String>,
    pub bio: Option<String>,
    pub publication: Option<String>,
    pub awards: Option<String>,
    pub workshop: Option<String>,
    pub work_experience: Option<String>,
    pub projects: Option<String>,
    pub seo: Option<SeoFields>,
}

/// Query parameters accepted by the faculty list.
#[derive(Debug, Default, Deserialize)]
pub struct FacultyFilter {
    pub department_id: Option<DbId>,
    pub designation_id: Option<DbId>,
    pub search: Option<String>,
}

/// A row from the `faculty_banners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacultyBanner {
    pub id: DbId,
    pub faculty_id: DbId,
    pub image: String,
    pub alt: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFacultyBanner {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFacultyBanner {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    pub alt: Option<String>,
}
