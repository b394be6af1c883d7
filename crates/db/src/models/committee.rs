//! Committee categories and members.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A row from the `committee_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitteeCategory {
    pub id: DbId,
    pub name: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommitteeCategory {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommitteeCategory {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name: Option<String>,
}

/// A row from the `committee_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitteeMember {
    pub id: DbId,
    pub category_id: DbId,
    pub name_of_member: String,
    pub designation: String,
    pub position: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommitteeMember {
    #[validate(required)]
    pub category_id: Option<DbId>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub name_of_member: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub designation: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub position: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommitteeMember {
    pub category_id: Option<DbId>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub name_of_member: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub designation: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub position: Option<String>,
}

/// Query parameters accepted by the member list.
#[derive(Debug, Default, Deserialize)]
pub struct CommitteeMemberFilter {
    pub category_id: Option<DbId>,
    pub search: Option<String>,
}
