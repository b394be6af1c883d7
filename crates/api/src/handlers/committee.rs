//! Handlers for `/committee-categories` and `/committee-members`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::committee::{
    CommitteeCategory, CommitteeMember, CommitteeMemberFilter, CreateCommitteeCategory,
    CreateCommitteeMember, UpdateCommitteeCategory, UpdateCommitteeMember,
};
use campus_db::repositories::{CommitteeCategoryRepo, CommitteeMemberRepo};

use super::ensure_exists_opt;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

const CATEGORY_ENTITY: &str = "CommitteeCategory";
const MEMBER_ENTITY: &str = "CommitteeMember";

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/committee-categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CommitteeCategory>>> {
    Ok(Json(CommitteeCategoryRepo::list(&state.pool).await?))
}

/// GET /api/v1/committee-categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CommitteeCategory>> {
    let category = CommitteeCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(CATEGORY_ENTITY, id))?;
    Ok(Json(category))
}

/// POST /api/v1/committee-categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCommitteeCategory>,
) -> AppResult<(StatusCode, Json<CommitteeCategory>)> {
    let category = CommitteeCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/committee-categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCommitteeCategory>,
) -> AppResult<Json<CommitteeCategory>> {
    let category = CommitteeCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(CATEGORY_ENTITY, id))?;
    Ok(Json(category))
}

/// DELETE /api/v1/committee-categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CommitteeCategoryRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(CATEGORY_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// GET /api/v1/committee-members
pub async fn list_members(
    State(state): State<AppState>,
    Query(filter): Query<CommitteeMemberFilter>,
) -> AppResult<Json<Vec<CommitteeMember>>> {
    Ok(Json(CommitteeMemberRepo::list(&state.pool, &filter).await?))
}

/// GET /api/v1/committee-members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CommitteeMember>> {
    let member = CommitteeMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(MEMBER_ENTITY, id))?;
    Ok(Json(member))
}

/// POST /api/v1/committee-members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCommitteeMember>,
) -> AppResult<(StatusCode, Json<CommitteeMember>)> {
    ensure_exists_opt(&state.pool, "committee_categories", CATEGORY_ENTITY, input.category_id)
        .await?;
    let member = CommitteeMemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/v1/committee-members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCommitteeMember>,
) -> AppResult<Json<CommitteeMember>> {
    ensure_exists_opt(&state.pool, "committee_categories", CATEGORY_ENTITY, input.category_id)
        .await?;
    let member = CommitteeMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(MEMBER_ENTITY, id))?;
    Ok(Json(member))
}

/// DELETE /api/v1/committee-members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CommitteeMemberRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(MEMBER_ENTITY, id))
    }
}
