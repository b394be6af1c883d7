//! Course entity and DTOs.

use campus_core::seo::SeoFields;
use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::seo::SeoColumns;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub department_id: Option<DbId>,
    pub ug: bool,
    pub pg: bool,
    pub phd: bool,
    pub about_the_course: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    #[sqlx(flatten)]
    pub seo: SeoColumns,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a course. `slug` is generated from `name` when absent.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    pub department_id: Option<DbId>,
    pub ug: Option<bool>,
    pub pg: Option<bool>,
    pub phd: Option<bool>,
    pub about_the_course: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub seo: Option<SeoFields>,
}

/// DTO for updating a course. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub slug: Option<String>,
    pub department_id: Option<DbId>,
    pub ug: Option<bool>,
    pub pg: Option<bool>,
    pub phd: Option<bool>,
    pub about_the_course: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub seo: Option<SeoFields>,
}

/// Query parameters accepted by the course list.
#[derive(Debug, Default, Deserialize)]
pub struct CourseFilter {
    /// Department slug or numeric id.
    pub department: Option<String>,
    pub search: Option<String>,
}
