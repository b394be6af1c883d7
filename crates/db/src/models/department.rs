//! Department entity, its contact card, and DTOs.

use campus_core::seo::SeoFields;
use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::seo::SeoColumns;

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub ug: bool,
    pub pg: bool,
    pub phd: bool,
    pub about: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub programs_image: Option<String>,
    pub programs_image_alt: Option<String>,
    pub facilities_overview: Option<String>,
    pub contact_id: Option<DbId>,
    #[sqlx(flatten)]
    pub seo: SeoColumns,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a department. `slug` is generated from `name` when absent.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartment {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    pub ug: Option<bool>,
    pub pg: Option<bool>,
    pub phd: Option<bool>,
    pub about: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub programs_image: Option<String>,
    pub programs_image_alt: Option<String>,
    pub facilities_overview: Option<String>,
    pub contact_id: Option<DbId>,
    /// Explicit SEO values; anything left out is generated.
    pub seo: Option<SeoFields>,
}

/// DTO for updating a department. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateDepartment {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub slug: Option<String>,
    pub ug: Option<bool>,
    pub pg: Option<bool>,
    pub phd: Option<bool>,
    pub about: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub programs_image: Option<String>,
    pub programs_image_alt: Option<String>,
    pub facilities_overview: Option<String>,
    pub contact_id: Option<DbId>,
    pub seo: Option<SeoFields>,
}

/// Query parameters accepted by the department list.
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentFilter {
    pub search: Option<String>,
    pub ug: Option<bool>,
    pub pg: Option<bool>,
    pub phd: Option<bool>,
}

/// A row from the `department_contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentContact {
    pub id: DbId,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: String,
    pub position: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub heading: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a department contact.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentContact {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub heading: Option<String>,
}

/// DTO for updating a department contact.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentContact {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub heading: Option<String>,
}
