//! Handlers for `/designations` and `/faculty`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::seo::SeoFields;
use campus_core::types::DbId;
use campus_db::models::faculty::{
    CreateDesignation, CreateFaculty, Designation, Faculty, FacultyFilter, UpdateDesignation,
    UpdateFaculty,
};
use campus_db::models::seo::SeoTable;
use campus_db::repositories::{DepartmentRepo, DesignationRepo, FacultyRepo};

use super::{ensure_exists, ensure_exists_opt};
use crate::dto::{DesignationDetail, FacultyDetail};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::seo;
use crate::state::AppState;

const ENTITY: &str = "Faculty";
const DESIGNATION_ENTITY: &str = "Designation";

// ---------------------------------------------------------------------------
// Designations
// ---------------------------------------------------------------------------

/// GET /api/v1/designations
pub async fn list_designations(State(state): State<AppState>) -> AppResult<Json<Vec<Designation>>> {
    Ok(Json(DesignationRepo::list(&state.pool).await?))
}

/// GET /api/v1/designations/{id}
pub async fn get_designation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DesignationDetail>> {
    let designation = DesignationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(DESIGNATION_ENTITY, id))?;
    let faculty_count = DesignationRepo::faculty_count(&state.pool, id).await?;
    Ok(Json(DesignationDetail {
        designation,
        faculty_count,
    }))
}

/// POST /api/v1/designations
pub async fn create_designation(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDesignation>,
) -> AppResult<(StatusCode, Json<Designation>)> {
    let designation = DesignationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(designation)))
}

/// PUT /api/v1/designations/{id}
pub async fn update_designation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDesignation>,
) -> AppResult<Json<Designation>> {
    let designation = DesignationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(DESIGNATION_ENTITY, id))?;
    Ok(Json(designation))
}

/// DELETE /api/v1/designations/{id}
///
/// Faculty holding the designation are removed with it.
pub async fn delete_designation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DesignationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(DESIGNATION_ENTITY, id))
    }
}

/// GET /api/v1/designations/{id}/faculty
pub async fn list_by_designation(
    State(state): State<AppState>,
    Path(designation_id): Path<DbId>,
) -> AppResult<Json<Vec<Faculty>>> {
    ensure_exists(&state.pool, "designations", DESIGNATION_ENTITY, designation_id).await?;
    let filter = FacultyFilter {
        designation_id: Some(designation_id),
        ..Default::default()
    };
    Ok(Json(FacultyRepo::list(&state.pool, &filter).await?))
}

// ---------------------------------------------------------------------------
// Faculty
// ---------------------------------------------------------------------------

/// GET /api/v1/faculty
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<FacultyFilter>,
) -> AppResult<Json<Vec<Faculty>>> {
    Ok(Json(FacultyRepo::list(&state.pool, &filter).await?))
}

/// GET /api/v1/departments/{id}/faculty
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
) -> AppResult<Json<Vec<Faculty>>> {
    ensure_exists(&state.pool, "departments", "Department", department_id).await?;
    let filter = FacultyFilter {
        department_id: Some(department_id),
        ..Default::default()
    };
    Ok(Json(FacultyRepo::list(&state.pool, &filter).await?))
}

/// GET /api/v1/faculty/search/{term}
///
/// 404 when nothing matches.
pub async fn search(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> AppResult<Json<Vec<Faculty>>> {
    let filter = FacultyFilter {
        search: Some(term.clone()),
        ..Default::default()
    };
    let faculty = FacultyRepo::list(&state.pool, &filter).await?;
    if faculty.is_empty() || term.trim().is_empty() {
        return Err(AppError::not_found_by(ENTITY, "search", term));
    }
    Ok(Json(faculty))
}

/// GET /api/v1/faculty/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FacultyDetail>> {
    let faculty = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(FacultyDetail::load(&state.pool, faculty).await?))
}

/// GET /api/v1/faculty/by-name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<FacultyDetail>> {
    let faculty = FacultyRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::not_found_by(ENTITY, "name", name))?;
    Ok(Json(FacultyDetail::load(&state.pool, faculty).await?))
}

/// POST /api/v1/faculty
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFaculty>,
) -> AppResult<(StatusCode, Json<Faculty>)> {
    check_references(&state, input.designation_id, input.department_id).await?;
    let faculty = FacultyRepo::create(&state.pool, &input).await?;
    let faculty = sync_seo(&state, faculty, input.seo.as_ref()).await?;
    tracing::info!(faculty_id = faculty.id, "Faculty created");
    Ok((StatusCode::CREATED, Json(faculty)))
}

/// PUT /api/v1/faculty/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFaculty>,
) -> AppResult<Json<Faculty>> {
    check_references(&state, input.designation_id, input.department_id).await?;
    let faculty = FacultyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    let faculty = sync_seo(&state, faculty, input.seo.as_ref()).await?;
    Ok(Json(faculty))
}

/// DELETE /api/v1/faculty/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FacultyRepo::delete(&state.pool, id).await? {
        tracing::info!(faculty_id = id, "Faculty deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

async fn check_references(
    state: &AppState,
    designation_id: Option<DbId>,
    department_id: Option<DbId>,
) -> AppResult<()> {
    ensure_exists_opt(&state.pool, "designations", DESIGNATION_ENTITY, designation_id).await?;
    ensure_exists_opt(&state.pool, "departments", "Department", department_id).await
}

async fn sync_seo(state: &AppState, faculty: Faculty, explicit: Option<&SeoFields>) -> AppResult<Faculty> {
    let (designation, department) = tokio::try_join!(
        DesignationRepo::find_by_id(&state.pool, faculty.designation_id),
        DepartmentRepo::find_by_id(&state.pool, faculty.department_id),
    )?;
    let source = seo::faculty_source(
        &faculty,
        designation.as_ref().map(|d| d.name.as_str()),
        department.as_ref().map(|d| d.name.as_str()),
    );
    let changed = seo::store(
        &state.pool,
        SeoTable::Faculty,
        faculty.id,
        explicit,
        &faculty.seo,
        &source,
        &state.config.site,
    )
    .await?;
    if !changed {
        return Ok(faculty);
    }
    let id = faculty.id;
    FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}
