//! Handlers for `/news-events`, `/news-tags`, `/news-images` and
//! `/page-metadata`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::seo::SeoFields;
use campus_core::types::DbId;
use campus_db::models::news::{
    CreateNewsEvent, CreateNewsImage, CreateNewsTag, CreatePageMetadata, NewsEvent, NewsFilter,
    NewsImage, NewsTag, PageMetadata, UpdateNewsEvent, UpdateNewsImage, UpdatePageMetadata,
};
use campus_db::models::seo::SeoTable;
use campus_db::repositories::news_asset_repo::missing_ids;
use campus_db::repositories::{
    DepartmentRepo, NewsEventRepo, NewsImageRepo, NewsTagRepo, PageMetadataRepo,
};

use super::ensure_exists_opt;
use crate::dto::{NewsEventDetail, NewsEventDto};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::seo;
use crate::state::AppState;

const ENTITY: &str = "NewsEvent";
const TAG_ENTITY: &str = "NewsTag";
const IMAGE_ENTITY: &str = "NewsImage";
const METADATA_ENTITY: &str = "PageMetadata";

// ---------------------------------------------------------------------------
// News items
// ---------------------------------------------------------------------------

/// GET /api/v1/news-events
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<NewsFilter>,
) -> AppResult<Json<Vec<NewsEventDto>>> {
    let events = NewsEventRepo::list(&state.pool, &filter).await?;
    Ok(Json(NewsEventDto::load_many(&state.pool, events).await?))
}

/// GET /api/v1/news-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NewsEventDetail>> {
    let event = NewsEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(NewsEventDetail::load(&state.pool, event).await?))
}

/// POST /api/v1/news-events
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNewsEvent>,
) -> AppResult<(StatusCode, Json<NewsEventDto>)> {
    check_references(
        &state,
        input.department_id,
        input.metadata_id,
        input.tag_ids.as_deref(),
        input.image_ids.as_deref(),
    )
    .await?;

    let event = NewsEventRepo::create(&state.pool, &input).await?;
    let event = sync_seo(&state, event, input.seo.as_ref()).await?;

    tracing::info!(news_event_id = event.id, category = %event.category, "News item created");
    Ok((
        StatusCode::CREATED,
        Json(NewsEventDto::load(&state.pool, event).await?),
    ))
}

/// PUT /api/v1/news-events/{id}
///
/// A present `tag_ids` / `image_ids` list replaces the association set;
/// an absent one leaves it untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNewsEvent>,
) -> AppResult<Json<NewsEventDto>> {
    check_references(
        &state,
        input.department_id,
        input.metadata_id,
        input.tag_ids.as_deref(),
        input.image_ids.as_deref(),
    )
    .await?;

    let event = NewsEventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    let event = sync_seo(&state, event, input.seo.as_ref()).await?;
    Ok(Json(NewsEventDto::load(&state.pool, event).await?))
}

/// DELETE /api/v1/news-events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if NewsEventRepo::delete(&state.pool, id).await? {
        tracing::info!(news_event_id = id, "News item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

async fn check_references(
    state: &AppState,
    department_id: Option<DbId>,
    metadata_id: Option<DbId>,
    tag_ids: Option<&[DbId]>,
    image_ids: Option<&[DbId]>,
) -> AppResult<()> {
    ensure_exists_opt(&state.pool, "departments", "Department", department_id).await?;
    ensure_exists_opt(&state.pool, "page_metadata", METADATA_ENTITY, metadata_id).await?;
    if let Some(ids) = tag_ids.filter(|ids| !ids.is_empty()) {
        if let Some(&missing) = missing_ids(&state.pool, "news_tags", ids).await?.first() {
            return Err(AppError::not_found(TAG_ENTITY, missing));
        }
    }
    if let Some(ids) = image_ids.filter(|ids| !ids.is_empty()) {
        if let Some(&missing) = missing_ids(&state.pool, "news_images", ids).await?.first() {
            return Err(AppError::not_found(IMAGE_ENTITY, missing));
        }
    }
    Ok(())
}

async fn sync_seo(
    state: &AppState,
    event: NewsEvent,
    explicit: Option<&SeoFields>,
) -> AppResult<NewsEvent> {
    let event_ids = [event.id];
    let (department, tags) = tokio::try_join!(
        DepartmentRepo::find_by_id(&state.pool, event.department_id),
        NewsEventRepo::tags_for(&state.pool, &event_ids),
    )?;
    let tag_names: Vec<String> = tags.into_iter().map(|(_, tag)| tag.tag_name).collect();
    let source = seo::news_source(
        &event,
        department.as_ref().map(|d| d.name.as_str()),
        &tag_names,
    );
    let changed = seo::store(
        &state.pool,
        SeoTable::NewsEvents,
        event.id,
        explicit,
        &event.seo,
        &source,
        &state.config.site,
    )
    .await?;
    if !changed {
        return Ok(event);
    }
    let id = event.id;
    NewsEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// GET /api/v1/news-tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Json<Vec<NewsTag>>> {
    Ok(Json(NewsTagRepo::list(&state.pool).await?))
}

/// POST /api/v1/news-tags
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNewsTag>,
) -> AppResult<(StatusCode, Json<NewsTag>)> {
    let tag = NewsTagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// DELETE /api/v1/news-tags/{id}
pub async fn delete_tag(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if NewsTagRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(TAG_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// GET /api/v1/news-images
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<NewsImage>>> {
    Ok(Json(NewsImageRepo::list(&state.pool).await?))
}

/// POST /api/v1/news-images
pub async fn create_image(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNewsImage>,
) -> AppResult<(StatusCode, Json<NewsImage>)> {
    let image = NewsImageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/v1/news-images/{id}
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNewsImage>,
) -> AppResult<Json<NewsImage>> {
    let image = NewsImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(IMAGE_ENTITY, id))?;
    Ok(Json(image))
}

/// DELETE /api/v1/news-images/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NewsImageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(IMAGE_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

/// GET /api/v1/page-metadata
pub async fn list_metadata(State(state): State<AppState>) -> AppResult<Json<Vec<PageMetadata>>> {
    Ok(Json(PageMetadataRepo::list(&state.pool).await?))
}

/// GET /api/v1/page-metadata/{id}
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PageMetadata>> {
    let metadata = PageMetadataRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(METADATA_ENTITY, id))?;
    Ok(Json(metadata))
}

/// POST /api/v1/page-metadata
pub async fn create_metadata(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePageMetadata>,
) -> AppResult<(StatusCode, Json<PageMetadata>)> {
    let metadata = PageMetadataRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(metadata)))
}

/// PUT /api/v1/page-metadata/{id}
pub async fn update_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePageMetadata>,
) -> AppResult<Json<PageMetadata>> {
    let metadata = PageMetadataRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(METADATA_ENTITY, id))?;
    Ok(Json(metadata))
}

/// DELETE /api/v1/page-metadata/{id}
pub async fn delete_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PageMetadataRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(METADATA_ENTITY, id))
    }
}
