//! News and events, their tags and images, and page metadata records.

use campus_core::seo::SeoFields;
use campus_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::seo::SeoColumns;

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

/// A row from the `page_metadata` table, linked one-to-one to a news item.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageMetadata {
    pub id: DbId,
    pub page_id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub locale: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub page_type: String,
    pub sitename: String,
    pub image: Option<String>,
    pub charset: String,
    pub viewport: String,
    pub robots: String,
    pub author: String,
    pub canonical_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePageMetadata {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub page_id: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub title: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub url: Option<String>,
    #[validate(
        required,
        custom(function = "campus_core::validation::not_blank"),
        length(max = 160, message = "must be at most 160 characters")
    )]
    pub description: Option<String>,
    pub locale: Option<String>,
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub sitename: Option<String>,
    pub image: Option<String>,
    pub charset: Option<String>,
    pub viewport: Option<String>,
    pub robots: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub author: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub canonical_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePageMetadata {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub page_id: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub url: Option<String>,
    #[validate(length(max = 160, message = "must be at most 160 characters"))]
    pub description: Option<String>,
    pub locale: Option<String>,
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    pub sitename: Option<String>,
    pub image: Option<String>,
    pub charset: Option<String>,
    pub viewport: Option<String>,
    pub robots: Option<String>,
    pub author: Option<String>,
    pub canonical_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Tags and images
// ---------------------------------------------------------------------------

/// A row from the `news_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsTag {
    pub id: DbId,
    pub tag_name: String,
    pub unique_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNewsTag {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub tag_name: Option<String>,
}

/// A row from the `news_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsImage {
    pub id: DbId,
    pub image: String,
    pub alt: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNewsImage {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNewsImage {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub image: Option<String>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub alt: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// News / events
// ---------------------------------------------------------------------------

/// A row from the `news_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsEvent {
    pub id: DbId,
    pub heading: String,
    pub date: Date,
    pub link: Option<String>,
    pub category: String,
    pub department_id: DbId,
    pub content: String,
    pub metadata_id: Option<DbId>,
    pub is_published: bool,
    pub is_featured: bool,
    pub unique_id: Uuid,
    #[sqlx(flatten)]
    pub seo: SeoColumns,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news item. `tag_ids` / `image_ids` set the
/// associations in the same request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNewsEvent {
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    #[validate(required)]
    pub date: Option<Date>,
    pub link: Option<String>,
    #[validate(
        required,
        custom(function = "campus_core::choices::validate_news_category")
    )]
    pub category: Option<String>,
    #[validate(required)]
    pub department_id: Option<DbId>,
    #[validate(required, custom(function = "campus_core::validation::not_blank"))]
    pub content: Option<String>,
    pub metadata_id: Option<DbId>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub tag_ids: Option<Vec<DbId>>,
    pub image_ids: Option<Vec<DbId>>,
    pub seo: Option<SeoFields>,
}

/// DTO for updating a news item. A present `tag_ids` / `image_ids` list
/// replaces the whole association set.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNewsEvent {
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub heading: Option<String>,
    pub date: Option<Date>,
    pub link: Option<String>,
    #[validate(custom(function = "campus_core::choices::validate_news_category"))]
    pub category: Option<String>,
    pub department_id: Option<DbId>,
    #[validate(custom(function = "campus_core::validation::not_blank"))]
    pub content: Option<String>,
    pub metadata_id: Option<DbId>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub tag_ids: Option<Vec<DbId>>,
    pub image_ids: Option<Vec<DbId>>,
    pub seo: Option<SeoFields>,
}

/// Query parameters accepted by the news list.
#[derive(Debug, Default, Deserialize)]
pub struct NewsFilter {
    pub department_id: Option<DbId>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
    /// Substring of a tag name.
    pub tag: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
