//! Sections rendered on a course page. Every row belongs to one course and
//! is deleted with it; number data hangs off an about section.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// ---------------------------------------------------------------------------
// About + number data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseAbout {
    pub id: DbId,
    pub course_id: DbId,
    pub heading: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseAbout {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseAbout {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

/// A number shown inside a course about section ("120 seats").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseNumber {
    pub id: DbId,
    pub about_section_id: DbId,
    pub number: i32,
    pub symbol: Option<String>,
    pub text: String,
    pub featured: bool,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseNumber {
    #[validate(required)]
    pub number: Option<i32>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub symbol: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseNumber {
    pub number: Option<i32>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub symbol: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
    pub featured: Option<bool>,
}

// ---------------------------------------------------------------------------
// Quick links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseQuickLink {
    pub id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseQuickLink {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseQuickLink {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseSubject {
    pub id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseSubject {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseSubject {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Labs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseLab {
    pub id: DbId,
    pub course_id: DbId,
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
pub struct CreateCourseLab {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    /// Defaults to `true`.
    pub link_blank: Option<bool>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseLab {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub link_blank: Option<bool>,
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Curriculum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseCurriculum {
    pub id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub link_file: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseCurriculum {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub link_file: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseCurriculum {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub link_file: Option<String>,
}

// ---------------------------------------------------------------------------
// Benefits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseBenefit {
    pub id: DbId,
    pub course_id: DbId,
    pub icon: Option<String>,
    pub text: String,
    pub benefit_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseBenefit {
    pub icon: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
    pub benefit_image: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseBenefit {
    pub icon: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
    pub benefit_image: Option<String>,
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseContact {
    pub id: DbId,
    pub course_id: DbId,
    pub mail: Option<String>,
    pub phone: Option<String>,
    pub name: String,
    pub position: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub heading: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseContact {
    #[validate(email)]
    pub mail: Option<String>,
    pub phone: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub position: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub heading: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseContact {
    #[validate(email)]
    pub mail: Option<String>,
    pub phone: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
    pub position: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub heading: Option<String>,
}

// ---------------------------------------------------------------------------
// Calls to action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseCta {
    pub id: DbId,
    pub course_id: DbId,
    pub heading: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseCta {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseCta {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Banners
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseBanner {
    pub id: DbId,
    pub course_id: DbId,
    pub image: String,
    pub alt: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseBanner {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseBanner {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    pub alt: Option<String>,
}
