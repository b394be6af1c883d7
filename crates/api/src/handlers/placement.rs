//! Handlers for `/placement-stats`, `/placement-images` and
//! `/research-stats`.
//!
//! Statistics are returned as [`StatDto`] so clients get the rendered
//! `number + suffix` alongside the raw columns.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::placement::{
    CreatePlacementImage, CreatePlacementStat, CreateResearchStat, PlacementImage, PlacementStat,
    ResearchStat, UpdatePlacementImage, UpdatePlacementStat, UpdateResearchStat,
};
use campus_db::repositories::{PlacementImageRepo, PlacementStatRepo, ResearchStatRepo};

use crate::dto::StatDto;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

const PLACEMENT_ENTITY: &str = "PlacementStat";
const IMAGE_ENTITY: &str = "PlacementImage";
const RESEARCH_ENTITY: &str = "ResearchStat";

// ---------------------------------------------------------------------------
// Placement statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/placement-stats
pub async fn list_placement_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatDto<PlacementStat>>>> {
    let stats = PlacementStatRepo::list(&state.pool).await?;
    Ok(Json(stats.into_iter().map(StatDto::from).collect()))
}

/// GET /api/v1/placement-stats/{id}
pub async fn get_placement_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatDto<PlacementStat>>> {
    let stat = PlacementStatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(PLACEMENT_ENTITY, id))?;
    Ok(Json(stat.into()))
}

/// POST /api/v1/placement-stats
pub async fn create_placement_stat(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlacementStat>,
) -> AppResult<(StatusCode, Json<StatDto<PlacementStat>>)> {
    let stat = PlacementStatRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(stat.into())))
}

/// PUT /api/v1/placement-stats/{id}
pub async fn update_placement_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePlacementStat>,
) -> AppResult<Json<StatDto<PlacementStat>>> {
    let stat = PlacementStatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(PLACEMENT_ENTITY, id))?;
    Ok(Json(stat.into()))
}

/// DELETE /api/v1/placement-stats/{id}
pub async fn delete_placement_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlacementStatRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(PLACEMENT_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Placement images
// ---------------------------------------------------------------------------

/// GET /api/v1/placement-images
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<PlacementImage>>> {
    Ok(Json(PlacementImageRepo::list(&state.pool).await?))
}

/// GET /api/v1/placement-images/{id}
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlacementImage>> {
    let image = PlacementImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(IMAGE_ENTITY, id))?;
    Ok(Json(image))
}

/// POST /api/v1/placement-images
pub async fn create_image(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlacementImage>,
) -> AppResult<(StatusCode, Json<PlacementImage>)> {
    let image = PlacementImageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/v1/placement-images/{id}
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePlacementImage>,
) -> AppResult<Json<PlacementImage>> {
    let image = PlacementImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(IMAGE_ENTITY, id))?;
    Ok(Json(image))
}

/// DELETE /api/v1/placement-images/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlacementImageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(IMAGE_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Research statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/research-stats
pub async fn list_research_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatDto<ResearchStat>>>> {
    let stats = ResearchStatRepo::list(&state.pool).await?;
    Ok(Json(stats.into_iter().map(StatDto::from).collect()))
}

/// GET /api/v1/research-stats/{id}
pub async fn get_research_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatDto<ResearchStat>>> {
    let stat = ResearchStatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(RESEARCH_ENTITY, id))?;
    Ok(Json(stat.into()))
}

/// POST /api/v1/research-stats
pub async fn create_research_stat(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateResearchStat>,
) -> AppResult<(StatusCode, Json<StatDto<ResearchStat>>)> {
    let stat = ResearchStatRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(stat.into())))
}

/// PUT /api/v1/research-stats/{id}
pub async fn update_research_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateResearchStat>,
) -> AppResult<Json<StatDto<ResearchStat>>> {
    let stat = ResearchStatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(RESEARCH_ENTITY, id))?;
    Ok(Json(stat.into()))
}

/// DELETE /api/v1/research-stats/{id}
pub async fn delete_research_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ResearchStatRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(RESEARCH_ENTITY, id))
    }
}
