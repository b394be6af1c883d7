//! Placement and research statistics, and placement gallery images.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A row from the `placement_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacementStat {
    pub id: DbId,
    pub placement_name: String,
    pub placement_number: String,
    pub suffix: Option<String>,
    pub text: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlacementStat {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub placement_name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub placement_number: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub suffix: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlacementStat {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub placement_name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub placement_number: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub suffix: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
}

/// A row from the `placement_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacementImage {
    pub id: DbId,
    pub image: String,
    pub alt: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlacementImage {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlacementImage {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
}

/// A row from the `research_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResearchStat {
    pub id: DbId,
    pub research_name: String,
    pub number: String,
    pub suffix: Option<String>,
    pub text: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateResearchStat {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub research_name: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub number: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub suffix: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateResearchStat {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub research_name: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub number: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_stat_suffix"))]
    pub suffix: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub text: Option<String>,
}
