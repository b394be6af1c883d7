//! Generic handlers for parent-owned page sections.
//!
//! Mounted once per section type, e.g. `/departments/{id}/about` serves
//! [`DepartmentAbout`](campus_db::models::department_section::DepartmentAbout)
//! rows. Every route first checks that the parent exists so an unknown
//! parent is a 404 rather than an empty list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::repositories::{Section, SectionRepo};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub(crate) async fn ensure_parent<S: Section>(state: &AppState, parent_id: DbId) -> AppResult<()> {
    if SectionRepo::<S>::parent_exists(&state.pool, parent_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found(S::PARENT_ENTITY, parent_id))
    }
}

/// GET /api/v1/{parents}/{id}/{section}
pub async fn list<S>(
    State(state): State<AppState>,
    Path(parent_id): Path<DbId>,
) -> AppResult<Json<Vec<S>>>
where
    S: Section + Serialize,
{
    ensure_parent::<S>(&state, parent_id).await?;
    let items = SectionRepo::<S>::list(&state.pool, parent_id).await?;
    Ok(Json(items))
}

/// GET /api/v1/{parents}/{id}/{section}/{item_id}
pub async fn get_by_id<S>(
    State(state): State<AppState>,
    Path((parent_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<S>>
where
    S: Section + Serialize,
{
    let item = SectionRepo::<S>::find(&state.pool, parent_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(S::ENTITY, id))?;
    Ok(Json(item))
}

/// POST /api/v1/{parents}/{id}/{section}
pub async fn create<S>(
    State(state): State<AppState>,
    Path(parent_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<S::Create>,
) -> AppResult<(StatusCode, Json<S>)>
where
    S: Section + Serialize,
    S::Create: DeserializeOwned + Validate + Send,
{
    ensure_parent::<S>(&state, parent_id).await?;
    let item = SectionRepo::<S>::create(&state.pool, parent_id, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/{parents}/{id}/{section}/{item_id}
pub async fn update<S>(
    State(state): State<AppState>,
    Path((parent_id, id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<S::Update>,
) -> AppResult<Json<S>>
where
    S: Section + Serialize,
    S::Update: DeserializeOwned + Validate + Send,
{
    let item = SectionRepo::<S>::update(&state.pool, parent_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(S::ENTITY, id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/{parents}/{id}/{section}/{item_id}
pub async fn delete<S>(
    State(state): State<AppState>,
    Path((parent_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode>
where
    S: Section,
{
    if SectionRepo::<S>::delete(&state.pool, parent_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(S::ENTITY, id))
    }
}
