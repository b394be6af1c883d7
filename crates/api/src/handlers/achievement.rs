//! Handlers for `/college-achievements` and `/student-achievements`.
//!
//! Both tables share one row shape, so every handler is generic over an
//! [`AchievementScope`] marker and mounted twice.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_core::validation::require_text;
use campus_db::models::achievement::{
    Achievement, AchievementFilter, AchievementKind, CreateAchievement, UpdateAchievement,
};
use campus_db::repositories::AchievementRepo;

use super::ensure_exists_opt;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Selects the achievements table a handler works on.
pub trait AchievementScope: Send + Sync + 'static {
    const KIND: AchievementKind;
}

pub struct College;
pub struct Student;

impl AchievementScope for College {
    const KIND: AchievementKind = AchievementKind::College;
}

impl AchievementScope for Student {
    const KIND: AchievementKind = AchievementKind::Student;
}

/// GET /api/v1/{kind}-achievements
pub async fn list<K: AchievementScope>(
    State(state): State<AppState>,
    Query(filter): Query<AchievementFilter>,
) -> AppResult<Json<Vec<Achievement>>> {
    Ok(Json(AchievementRepo::list(&state.pool, K::KIND, &filter).await?))
}

/// GET /api/v1/{kind}-achievements/{id}
pub async fn get_by_id<K: AchievementScope>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Achievement>> {
    let achievement = AchievementRepo::find_by_id(&state.pool, K::KIND, id)
        .await?
        .ok_or_else(|| AppError::not_found(K::KIND.entity(), id))?;
    Ok(Json(achievement))
}

/// POST /api/v1/{kind}-achievements
///
/// College achievements also require a description.
pub async fn create<K: AchievementScope>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAchievement>,
) -> AppResult<(StatusCode, Json<Achievement>)> {
    if K::KIND == AchievementKind::College {
        require_text("description", input.description.as_deref())?;
    }
    check_references(&state, input.department_id, input.course_id).await?;
    let achievement = AchievementRepo::create(&state.pool, K::KIND, &input).await?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// PUT /api/v1/{kind}-achievements/{id}
pub async fn update<K: AchievementScope>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAchievement>,
) -> AppResult<Json<Achievement>> {
    if K::KIND == AchievementKind::College && input.description.is_some() {
        require_text("description", input.description.as_deref())?;
    }
    check_references(&state, input.department_id, input.course_id).await?;
    let achievement = AchievementRepo::update(&state.pool, K::KIND, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(K::KIND.entity(), id))?;
    Ok(Json(achievement))
}

/// DELETE /api/v1/{kind}-achievements/{id}
pub async fn delete<K: AchievementScope>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AchievementRepo::delete(&state.pool, K::KIND, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(K::KIND.entity(), id))
    }
}

async fn check_references(
    state: &AppState,
    department_id: Option<DbId>,
    course_id: Option<DbId>,
) -> AppResult<()> {
    ensure_exists_opt(&state.pool, "departments", "Department", department_id).await?;
    ensure_exists_opt(&state.pool, "courses", "Course", course_id).await
}
