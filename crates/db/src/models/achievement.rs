//! College and student achievements. Both tables share one shape.

use campus_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Which achievements table a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    College,
    Student,
}

impl AchievementKind {
    pub fn table_name(self) -> &'static str {
        match self {
            AchievementKind::College => "college_achievements",
            AchievementKind::Student => "student_achievements",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity(self) -> &'static str {
        match self {
            AchievementKind::College => "CollegeAchievement",
            AchievementKind::Student => "StudentAchievement",
        }
    }
}

/// A row from `college_achievements` or `student_achievements`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub image: String,
    pub alt: String,
    pub unique_id: Uuid,
    pub department_id: DbId,
    pub course_id: Option<DbId>,
    pub date: Date,
    pub description: Option<String>,
    pub relevant_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `description` is required for college achievements only; the handler
/// checks that.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAchievement {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    pub course_id: Option<DbId>,
    #[validate(required)]
    pub date: Option<Date>,
    pub description: Option<String>,
    pub relevant_link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAchievement {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
    pub department_id: Option<DbId>,
    pub course_id: Option<DbId>,
    pub date: Option<Date>,
    pub description: Option<String>,
    pub relevant_link: Option<String>,
}

/// Query parameters accepted by the achievement lists.
#[derive(Debug, Default, Deserialize)]
pub struct AchievementFilter {
    pub department_id: Option<DbId>,
    pub course_id: Option<DbId>,
    pub search: Option<String>,
}
