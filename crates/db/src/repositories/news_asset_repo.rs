//! Repositories for news tags, news images and page metadata records.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{
    CreateNewsImage, CreateNewsTag, CreatePageMetadata, NewsImage, NewsTag, PageMetadata,
    UpdateNewsImage, UpdatePageMetadata,
};

const TAG_COLUMNS: &str = "id, tag_name, unique_id, created_at, updated_at";
const IMAGE_COLUMNS: &str = "id, image, alt, is_active, created_at, updated_at";
const METADATA_COLUMNS: &str = "id, page_id, title, url, description, locale, type, sitename, \
     image, charset, viewport, robots, author, canonical_url, created_at, updated_at";

/// Ids from `ids` with no row in `table`, in input order.
///
/// `table` must be a static table name, never user input.
pub async fn missing_ids(pool: &PgPool, table: &str, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
    let query = format!(
        "SELECT wanted.id FROM UNNEST($1::BIGINT[]) WITH ORDINALITY AS wanted(id, ord)
         WHERE NOT EXISTS (SELECT 1 FROM {table} t WHERE t.id = wanted.id)
         ORDER BY wanted.ord"
    );
    let rows: Vec<(DbId,)> = sqlx::query_as(&query).bind(ids).fetch_all(pool).await?;
    Ok(rows.into_iter().map(|(id,)| id).collect())
}

pub struct NewsTagRepo;

impl NewsTagRepo {
    pub async fn create(pool: &PgPool, input: &CreateNewsTag) -> Result<NewsTag, sqlx::Error> {
        let query = format!("INSERT INTO news_tags (tag_name) VALUES ($1) RETURNING {TAG_COLUMNS}");
        sqlx::query_as::<_, NewsTag>(&query)
            .bind(input.tag_name.as_deref().map(str::trim))
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<NewsTag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM news_tags ORDER BY tag_name ASC");
        sqlx::query_as::<_, NewsTag>(&query).fetch_all(pool).await
    }

    /// Removing a tag unlinks it from every news item.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct NewsImageRepo;

impl NewsImageRepo {
    pub async fn create(pool: &PgPool, input: &CreateNewsImage) -> Result<NewsImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_images (image, alt, is_active) VALUES ($1, $2, COALESCE($3, true))
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, NewsImage>(&query)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<NewsImage>, sqlx::Error> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM news_images ORDER BY id DESC");
        sqlx::query_as::<_, NewsImage>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsImage,
    ) -> Result<Option<NewsImage>, sqlx::Error> {
        let query = format!(
            "UPDATE news_images SET
                image = COALESCE($2, image),
                alt = COALESCE($3, alt),
                is_active = COALESCE($4, is_active)
             WHERE id = $1
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, NewsImage>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.alt)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct PageMetadataRepo;

impl PageMetadataRepo {
    /// Omitted `locale`, `type`, `charset`, `viewport` and `robots` take the
    /// column defaults.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePageMetadata,
    ) -> Result<PageMetadata, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_metadata
                (page_id, title, url, description, locale, type, sitename, image, charset,
                 viewport, robots, author, canonical_url)
             VALUES ($1, $2, $3, $4,
                     COALESCE($5, 'en'), COALESCE($6, 'article'), $7, $8,
                     COALESCE($9, 'UTF-8'),
                     COALESCE($10, 'width=device-width, initial-scale=1.0'),
                     COALESCE($11, 'index, follow'), $12, $13)
             RETURNING {METADATA_COLUMNS}"
        );
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(input.page_id.as_deref().map(str::trim))
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .bind(&input.locale)
            .bind(&input.page_type)
            .bind(&input.sitename)
            .bind(&input.image)
            .bind(&input.charset)
            .bind(&input.viewport)
            .bind(&input.robots)
            .bind(&input.author)
            .bind(&input.canonical_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PageMetadata>, sqlx::Error> {
        let query = format!("SELECT {METADATA_COLUMNS} FROM page_metadata WHERE id = $1");
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PageMetadata>, sqlx::Error> {
        let query = format!("SELECT {METADATA_COLUMNS} FROM page_metadata ORDER BY page_id ASC");
        sqlx::query_as::<_, PageMetadata>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePageMetadata,
    ) -> Result<Option<PageMetadata>, sqlx::Error> {
        let query = format!(
            "UPDATE page_metadata SET
                page_id = COALESCE($2, page_id),
                title = COALESCE($3, title),
                url = COALESCE($4, url),
                description = COALESCE($5, description),
                locale = COALESCE($6, locale),
                type = COALESCE($7, type),
                sitename = COALESCE($8, sitename),
                image = COALESCE($9, image),
                charset = COALESCE($10, charset),
                viewport = COALESCE($11, viewport),
                robots = COALESCE($12, robots),
                author = COALESCE($13, author),
                canonical_url = COALESCE($14, canonical_url)
             WHERE id = $1
             RETURNING {METADATA_COLUMNS}"
        );
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(id)
            .bind(input.page_id.as_deref().map(str::trim))
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .bind(&input.locale)
            .bind(&input.page_type)
            .bind(&input.sitename)
            .bind(&input.image)
            .bind(&input.charset)
            .bind(&input.viewport)
            .bind(&input.robots)
            .bind(&input.author)
            .bind(&input.canonical_url)
            .fetch_optional(pool)
            .await
    }

    /// News items pointing at the record keep existing with `metadata_id`
    /// cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_metadata WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
