//! Repository for the `news_events` table and its tag/image associations.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use crate::models::news::{
    CreateNewsEvent, NewsEvent, NewsFilter, NewsImage, NewsTag, UpdateNewsEvent,
};
use crate::models::seo::SEO_COLUMNS;

const BASE_COLUMNS: &str = "id, heading, date, link, category, department_id, content, \
     metadata_id, is_published, is_featured, unique_id, created_at, updated_at";

const SEARCH_COLUMNS: &[&str] = &["heading", "content"];

/// Upper bound for `?limit=`.
pub const MAX_PAGE_SIZE: i64 = 200;

#[derive(FromRow)]
struct TagLink {
    news_event_id: DbId,
    #[sqlx(flatten)]
    tag: NewsTag,
}

#[derive(FromRow)]
struct ImageLink {
    news_event_id: DbId,
    #[sqlx(flatten)]
    image: NewsImage,
}

/// Provides CRUD operations for news items.
pub struct NewsEventRepo;

impl NewsEventRepo {
    /// Insert a news item and its tag/image associations in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateNewsEvent) -> Result<NewsEvent, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO news_events
                (heading, date, link, category, department_id, content, metadata_id,
                 is_published, is_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, true), COALESCE($9, false))
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        let event = sqlx::query_as::<_, NewsEvent>(&query)
            .bind(input.heading.as_deref().map(str::trim))
            .bind(input.date)
            .bind(&input.link)
            .bind(&input.category)
            .bind(input.department_id)
            .bind(&input.content)
            .bind(input.metadata_id)
            .bind(input.is_published)
            .bind(input.is_featured)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(tag_ids) = &input.tag_ids {
            replace_links(&mut tx, "news_event_tags", "tag_id", event.id, tag_ids).await?;
        }
        if let Some(image_ids) = &input.image_ids {
            replace_links(&mut tx, "news_event_images", "image_id", event.id, image_ids).await?;
        }
        tx.commit().await?;
        Ok(event)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsEvent>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM news_events WHERE id = $1");
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List news items, newest first, narrowed by the optional filters.
    pub async fn list(pool: &PgPool, filter: &NewsFilter) -> Result<Vec<NewsEvent>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("department_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.is_published.is_some() {
            conditions.push(format!("is_published = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.is_featured.is_some() {
            conditions.push(format!("is_featured = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.date_from.is_some() {
            conditions.push(format!("date >= ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.date_to.is_some() {
            conditions.push(format!("date <= ${bind_idx}"));
            bind_idx += 1;
        }
        let tag = search::normalize_term(filter.tag.as_deref());
        if tag.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM news_event_tags et JOIN news_tags t ON t.id = et.tag_id
                         WHERE et.news_event_id = news_events.id AND t.tag_name ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(SEARCH_COLUMNS, bind_idx));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let mut query = format!(
            "SELECT {BASE_COLUMNS}, {SEO_COLUMNS} FROM news_events {where_clause}
             ORDER BY date DESC, created_at DESC, id DESC"
        );
        let limit = filter.limit.map(|l| l.clamp(1, MAX_PAGE_SIZE));
        if limit.is_some() {
            query.push_str(&format!(" LIMIT ${bind_idx}"));
            bind_idx += 1;
        }
        let offset = filter.offset.map(|o| o.max(0));
        if offset.is_some() {
            query.push_str(&format!(" OFFSET ${bind_idx}"));
        }

        let mut q = sqlx::query_as::<_, NewsEvent>(&query);
        if let Some(id) = filter.department_id {
            q = q.bind(id);
        }
        if let Some(category) = &filter.category {
            q = q.bind(category);
        }
        if let Some(flag) = filter.is_published {
            q = q.bind(flag);
        }
        if let Some(flag) = filter.is_featured {
            q = q.bind(flag);
        }
        if let Some(date) = filter.date_from {
            q = q.bind(date);
        }
        if let Some(date) = filter.date_to {
            q = q.bind(date);
        }
        if let Some(tag) = tag {
            q = q.bind(search::contains_pattern(tag));
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        if let Some(limit) = limit {
            q = q.bind(limit);
        }
        if let Some(offset) = offset {
            q = q.bind(offset);
        }
        q.fetch_all(pool).await
    }

    /// Update a news item. Present `tag_ids` / `image_ids` replace the
    /// association sets in the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsEvent,
    ) -> Result<Option<NewsEvent>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE news_events SET
                heading = COALESCE($2, heading),
                date = COALESCE($3, date),
                link = COALESCE($4, link),
                category = COALESCE($5, category),
                department_id = COALESCE($6, department_id),
                content = COALESCE($7, content),
                metadata_id = COALESCE($8, metadata_id),
                is_published = COALESCE($9, is_published),
                is_featured = COALESCE($10, is_featured)
             WHERE id = $1
             RETURNING {BASE_COLUMNS}, {SEO_COLUMNS}"
        );
        let Some(event) = sqlx::query_as::<_, NewsEvent>(&query)
            .bind(id)
            .bind(input.heading.as_deref().map(str::trim))
            .bind(input.date)
            .bind(&input.link)
            .bind(&input.category)
            .bind(input.department_id)
            .bind(&input.content)
            .bind(input.metadata_id)
            .bind(input.is_published)
            .bind(input.is_featured)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(tag_ids) = &input.tag_ids {
            replace_links(&mut tx, "news_event_tags", "tag_id", id, tag_ids).await?;
        }
        if let Some(image_ids) = &input.image_ids {
            replace_links(&mut tx, "news_event_images", "image_id", id, image_ids).await?;
        }
        tx.commit().await?;
        Ok(Some(event))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Tags of the given news items as `(news_event_id, tag)` pairs.
    pub async fn tags_for(
        pool: &PgPool,
        event_ids: &[DbId],
    ) -> Result<Vec<(DbId, NewsTag)>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TagLink>(
            "SELECT et.news_event_id, t.id, t.tag_name, t.unique_id, t.created_at, t.updated_at
             FROM news_event_tags et JOIN news_tags t ON t.id = et.tag_id
             WHERE et.news_event_id = ANY($1)
             ORDER BY t.tag_name ASC",
        )
        .bind(event_ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|r| (r.news_event_id, r.tag)).collect())
    }

    /// Images of the given news items as `(news_event_id, image)` pairs.
    pub async fn images_for(
        pool: &PgPool,
        event_ids: &[DbId],
    ) -> Result<Vec<(DbId, NewsImage)>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ImageLink>(
            "SELECT ei.news_event_id, i.id, i.image, i.alt, i.is_active, i.created_at, i.updated_at
             FROM news_event_images ei JOIN news_images i ON i.id = ei.image_id
             WHERE ei.news_event_id = ANY($1)
             ORDER BY ei.id ASC",
        )
        .bind(event_ids)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| (r.news_event_id, r.image))
            .collect())
    }
}

/// Replace every `(news_event_id, <column>)` link of an event with `ids`.
async fn replace_links(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    column: &str,
    event_id: DbId,
    ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("DELETE FROM {table} WHERE news_event_id = $1"))
        .bind(event_id)
        .execute(&mut **tx)
        .await?;
    sqlx::query(&format!(
        "INSERT INTO {table} (news_event_id, {column})
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING"
    ))
    .bind(event_id)
    .bind(ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
