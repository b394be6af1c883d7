//! Handlers for `/companies`, `/career-openings` and `/career-successes`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::career::{
    CareerOpening, CareerOpeningFilter, CareerSuccess, CareerSuccessFilter, Company,
    CompanyFilter, CreateCareerOpening, CreateCareerSuccess, CreateCompany, UpdateCareerOpening,
    UpdateCareerSuccess, UpdateCompany,
};
use campus_db::repositories::{CareerOpeningRepo, CareerSuccessRepo, CompanyRepo};

use super::ensure_exists_opt;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

const COMPANY_ENTITY: &str = "Company";
const OPENING_ENTITY: &str = "CareerOpening";
const SUCCESS_ENTITY: &str = "CareerSuccess";

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

/// GET /api/v1/companies
pub async fn list_companies(
    State(state): State<AppState>,
    Query(filter): Query<CompanyFilter>,
) -> AppResult<Json<Vec<Company>>> {
    Ok(Json(CompanyRepo::list(&state.pool, &filter).await?))
}

/// GET /api/v1/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(COMPANY_ENTITY, id))?;
    Ok(Json(company))
}

/// POST /api/v1/companies
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = CompanyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// PUT /api/v1/companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(COMPANY_ENTITY, id))?;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id}
///
/// Success stories keep their row with `company_id` cleared.
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CompanyRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(COMPANY_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Openings
// ---------------------------------------------------------------------------

/// GET /api/v1/career-openings
pub async fn list_openings(
    State(state): State<AppState>,
    Query(filter): Query<CareerOpeningFilter>,
) -> AppResult<Json<Vec<CareerOpening>>> {
    Ok(Json(CareerOpeningRepo::list(&state.pool, &filter).await?))
}

/// GET /api/v1/career-openings/{id}
pub async fn get_opening(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CareerOpening>> {
    let opening = CareerOpeningRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(OPENING_ENTITY, id))?;
    Ok(Json(opening))
}

/// POST /api/v1/career-openings
pub async fn create_opening(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCareerOpening>,
) -> AppResult<(StatusCode, Json<CareerOpening>)> {
    ensure_exists_opt(&state.pool, "departments", "Department", input.department_id).await?;
    let opening = CareerOpeningRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(opening)))
}

/// PUT /api/v1/career-openings/{id}
pub async fn update_opening(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCareerOpening>,
) -> AppResult<Json<CareerOpening>> {
    ensure_exists_opt(&state.pool, "departments", "Department", input.department_id).await?;
    let opening = CareerOpeningRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(OPENING_ENTITY, id))?;
    Ok(Json(opening))
}

/// DELETE /api/v1/career-openings/{id}
pub async fn delete_opening(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CareerOpeningRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(OPENING_ENTITY, id))
    }
}

// ---------------------------------------------------------------------------
// Success stories
// ---------------------------------------------------------------------------

/// GET /api/v1/career-successes
pub async fn list_successes(
    State(state): State<AppState>,
    Query(filter): Query<CareerSuccessFilter>,
) -> AppResult<Json<Vec<CareerSuccess>>> {
    Ok(Json(CareerSuccessRepo::list(&state.pool, &filter).await?))
}

/// GET /api/v1/career-successes/{id}
pub async fn get_success(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CareerSuccess>> {
    let success = CareerSuccessRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(SUCCESS_ENTITY, id))?;
    Ok(Json(success))
}

/// POST /api/v1/career-successes
pub async fn create_success(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCareerSuccess>,
) -> AppResult<(StatusCode, Json<CareerSuccess>)> {
    check_success_references(&state, input.department_id, input.company_id).await?;
    let success = CareerSuccessRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(success)))
}

/// PUT /api/v1/career-successes/{id}
pub async fn update_success(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCareerSuccess>,
) -> AppResult<Json<CareerSuccess>> {
    check_success_references(&state, input.department_id, input.company_id).await?;
    let success = CareerSuccessRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(SUCCESS_ENTITY, id))?;
    Ok(Json(success))
}

/// DELETE /api/v1/career-successes/{id}
pub async fn delete_success(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CareerSuccessRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(SUCCESS_ENTITY, id))
    }
}

async fn check_success_references(
    state: &AppState,
    department_id: Option<DbId>,
    company_id: Option<DbId>,
) -> AppResult<()> {
    ensure_exists_opt(&state.pool, "departments", "Department", department_id).await?;
    ensure_exists_opt(&state.pool, "companies", COMPANY_ENTITY, company_id).await
}
