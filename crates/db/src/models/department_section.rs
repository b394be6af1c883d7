//! Sections rendered on a department page. Every row belongs to one
//! department and is deleted with it.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentAbout {
    pub id: DbId,
    pub department_id: DbId,
    pub heading: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentAbout {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentAbout {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// A headline number such as "40+ faculty". Ordered by `display_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentStatistic {
    pub id: DbId,
    pub department_id: DbId,
    pub name: String,
    pub number: String,
    pub suffix: Option<String>,
    pub description: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `display_order` defaults to one past the department's current maximum.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentStatistic {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub number: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub suffix: Option<String>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentStatistic {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub number: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub suffix: Option<String>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Quick links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentQuickLink {
    pub id: DbId,
    pub department_id: DbId,
    pub name: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentQuickLink {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentQuickLink {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

/// A program offered by the department, optionally linked to a course.
/// A course appears at most once per department.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentProgram {
    pub id: DbId,
    pub department_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub explore_link: Option<String>,
    pub apply_link: Option<String>,
    pub course_id: Option<DbId>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentProgram {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub explore_link: Option<String>,
    pub apply_link: Option<String>,
    pub course_id: Option<DbId>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentProgram {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub explore_link: Option<String>,
    pub apply_link: Option<String>,
    pub course_id: Option<DbId>,
    pub display_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Curriculum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentCurriculum {
    pub id: DbId,
    pub department_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub file: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentCurriculum {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentCurriculum {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
}

// ---------------------------------------------------------------------------
// Benefits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentBenefit {
    pub id: DbId,
    pub department_id: DbId,
    pub icon: Option<String>,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentBenefit {
    pub icon: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentBenefit {
    pub icon: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Calls to action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentCta {
    pub id: DbId,
    pub department_id: DbId,
    pub heading: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentCta {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentCta {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// PO / PSO / PEO
// ---------------------------------------------------------------------------

/// Program outcomes, program-specific outcomes and educational objectives.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentPoPsoPeo {
    pub id: DbId,
    pub department_id: DbId,
    pub name: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentPoPsoPeo {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentPoPsoPeo {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentFacility {
    pub id: DbId,
    pub department_id: DbId,
    pub heading: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub link_blank: bool,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentFacility {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub link_blank: Option<bool>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentFacility {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub link_blank: Option<bool>,
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Banners
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentBanner {
    pub id: DbId,
    pub department_id: DbId,
    pub image: String,
    pub alt: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentBanner {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentBanner {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    pub alt: Option<String>,
}
