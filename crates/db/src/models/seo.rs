//! SEO column set shared by departments, courses, faculty and news items.

use std::ops::{Deref, DerefMut};

use campus_core::seo::SeoFields;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Column list appended to the entity column lists of SEO-enabled tables.
pub const SEO_COLUMNS: &str = "meta_title, meta_description, meta_keywords, canonical_url, \
     robots, author, og_title, og_description, og_image, og_image_alt, og_type, og_url, \
     og_site_name, og_locale, twitter_card, twitter_title, twitter_description, twitter_image, \
     twitter_image_alt, twitter_site, twitter_creator, schema_type, schema_json, focus_keyword, \
     breadcrumb_title";

/// [`SeoFields`] as read from a row. Embedded in entity structs with
/// `#[sqlx(flatten)]` and serialized as a nested `seo` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeoColumns(pub SeoFields);

impl Deref for SeoColumns {
    type Target = SeoFields;

    fn deref(&self) -> &SeoFields {
        &self.0
    }
}

impl DerefMut for SeoColumns {
    fn deref_mut(&mut self) -> &mut SeoFields {
        &mut self.0
    }
}

impl<'r> FromRow<'r, PgRow> for SeoColumns {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(SeoColumns(SeoFields {
            meta_title: row.try_get("meta_title")?,
            meta_description: row.try_get("meta_description")?,
            meta_keywords: row.try_get("meta_keywords")?,
            canonical_url: row.try_get("canonical_url")?,
            robots: row.try_get("robots")?,
            author: row.try_get("author")?,
            og_title: row.try_get("og_title")?,
            og_description: row.try_get("og_description")?,
            og_image: row.try_get("og_image")?,
            og_image_alt: row.try_get("og_image_alt")?,
            og_type: row.try_get("og_type")?,
            og_url: row.try_get("og_url")?,
            og_site_name: row.try_get("og_site_name")?,
            og_locale: row.try_get("og_locale")?,
            twitter_card: row.try_get("twitter_card")?,
            twitter_title: row.try_get("twitter_title")?,
            twitter_description: row.try_get("twitter_description")?,
            twitter_image: row.try_get("twitter_image")?,
            twitter_image_alt: row.try_get("twitter_image_alt")?,
            twitter_site: row.try_get("twitter_site")?,
            twitter_creator: row.try_get("twitter_creator")?,
            schema_type: row.try_get("schema_type")?,
            schema_json: row.try_get("schema_json")?,
            focus_keyword: row.try_get("focus_keyword")?,
            breadcrumb_title: row.try_get("breadcrumb_title")?,
        }))
    }
}

/// Tables carrying the SEO column set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeoTable {
    Departments,
    Courses,
    Faculty,
    NewsEvents,
}

impl SeoTable {
    pub fn table_name(self) -> &'static str {
        match self {
            SeoTable::Departments => "departments",
            SeoTable::Courses => "courses",
            SeoTable::Faculty => "faculty",
            SeoTable::NewsEvents => "news_events",
        }
    }
}
