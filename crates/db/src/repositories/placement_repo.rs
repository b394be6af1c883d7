//! Repositories for placement statistics, placement images and research
//! statistics.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::placement::{
    CreatePlacementImage, CreatePlacementStat, CreateResearchStat, PlacementImage, PlacementStat,
    ResearchStat, UpdatePlacementImage, UpdatePlacementStat, UpdateResearchStat,
};

const STAT_COLUMNS: &str =
    "id, placement_name, placement_number, suffix, text, unique_id, created_at, updated_at";
const IMAGE_COLUMNS: &str = "id, image, alt, unique_id, created_at, updated_at";
const RESEARCH_COLUMNS: &str =
    "id, research_name, number, suffix, text, unique_id, created_at, updated_at";

pub struct PlacementStatRepo;

impl PlacementStatRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlacementStat,
    ) -> Result<PlacementStat, sqlx::Error> {
        let query = format!(
            "INSERT INTO placement_stats (placement_name, placement_number, suffix, text)
             VALUES ($1, $2, $3, $4)
             RETURNING {STAT_COLUMNS}"
        );
        sqlx::query_as::<_, PlacementStat>(&query)
            .bind(&input.placement_name)
            .bind(input.placement_number.as_deref().map(str::trim))
            .bind(&input.suffix)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PlacementStat>, sqlx::Error> {
        let query = format!("SELECT {STAT_COLUMNS} FROM placement_stats WHERE id = $1");
        sqlx::query_as::<_, PlacementStat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PlacementStat>, sqlx::Error> {
        let query = format!("SELECT {STAT_COLUMNS} FROM placement_stats ORDER BY id ASC");
        sqlx::query_as::<_, PlacementStat>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlacementStat,
    ) -> Result<Option<PlacementStat>, sqlx::Error> {
        let query = format!(
            "UPDATE placement_stats SET
                placement_name = COALESCE($2, placement_name),
                placement_number = COALESCE($3, placement_number),
                suffix = COALESCE($4, suffix),
                text = COALESCE($5, text)
             WHERE id = $1
             RETURNING {STAT_COLUMNS}"
        );
        sqlx::query_as::<_, PlacementStat>(&query)
            .bind(id)
            .bind(&input.placement_name)
            .bind(input.placement_number.as_deref().map(str::trim))
            .bind(&input.suffix)
            .bind(&input.text)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placement_stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct PlacementImageRepo;

impl PlacementImageRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlacementImage,
    ) -> Result<PlacementImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO placement_images (image, alt) VALUES ($1, $2) RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, PlacementImage>(&query)
            .bind(&input.image)
            .bind(&input.alt)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PlacementImage>, sqlx::Error> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM placement_images WHERE id = $1");
        sqlx::query_as::<_, PlacementImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PlacementImage>, sqlx::Error> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM placement_images ORDER BY id DESC");
        sqlx::query_as::<_, PlacementImage>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlacementImage,
    ) -> Result<Option<PlacementImage>, sqlx::Error> {
        let query = format!(
            "UPDATE placement_images SET image = COALESCE($2, image), alt = COALESCE($3, alt)
             WHERE id = $1
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, PlacementImage>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.alt)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placement_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct ResearchStatRepo;

impl ResearchStatRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateResearchStat,
    ) -> Result<ResearchStat, sqlx::Error> {
        let query = format!(
            "INSERT INTO research_stats (research_name, number, suffix, text)
             VALUES ($1, $2, $3, $4)
             RETURNING {RESEARCH_COLUMNS}"
        );
        sqlx::query_as::<_, ResearchStat>(&query)
            .bind(&input.research_name)
            .bind(input.number.as_deref().map(str::trim))
            .bind(&input.suffix)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ResearchStat>, sqlx::Error> {
        let query = format!("SELECT {RESEARCH_COLUMNS} FROM research_stats WHERE id = $1");
        sqlx::query_as::<_, ResearchStat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ResearchStat>, sqlx::Error> {
        let query = format!("SELECT {RESEARCH_COLUMNS} FROM research_stats ORDER BY id ASC");
        sqlx::query_as::<_, ResearchStat>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResearchStat,
    ) -> Result<Option<ResearchStat>, sqlx::Error> {
        let query = format!(
            "UPDATE research_stats SET
                research_name = COALESCE($2, research_name),
                number = COALESCE($3, number),
                suffix = COALESCE($4, suffix),
                text = COALESCE($5, text)
             WHERE id = $1
             RETURNING {RESEARCH_COLUMNS}"
        );
        sqlx::query_as::<_, ResearchStat>(&query)
            .bind(id)
            .bind(&input.research_name)
            .bind(input.number.as_deref().map(str::trim))
            .bind(&input.suffix)
            .bind(&input.text)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM research_stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
