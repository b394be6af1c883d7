//! Public form submissions. The inboxes live in [`super::admin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_db::models::form::{
    CareerForm, ContactForm, CreateCareerForm, CreateContactForm, CreateGrievanceForm,
    GrievanceForm,
};
use campus_db::repositories::{CareerFormRepo, ContactFormRepo, GrievanceRepo};
use uuid::Uuid;

use super::ensure_exists_opt;
use crate::dto::GrievanceStatusDto;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/contact-forms
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactForm>,
) -> AppResult<(StatusCode, Json<ContactForm>)> {
    let form = ContactFormRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_form_id = form.id, "Contact form received");
    Ok((StatusCode::CREATED, Json(form)))
}

/// POST /api/v1/career-forms
pub async fn submit_career(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCareerForm>,
) -> AppResult<(StatusCode, Json<CareerForm>)> {
    ensure_exists_opt(&state.pool, "departments", "Department", input.department_id).await?;
    let form = CareerFormRepo::create(&state.pool, &input).await?;
    tracing::info!(career_form_id = form.id, "Career application received");
    Ok((StatusCode::CREATED, Json(form)))
}

/// POST /api/v1/grievances
///
/// The response carries the `reference_number` the submitter uses to
/// check the status later.
pub async fn submit_grievance(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateGrievanceForm>,
) -> AppResult<(StatusCode, Json<GrievanceForm>)> {
    ensure_exists_opt(&state.pool, "departments", "Department", input.department_id).await?;
    ensure_exists_opt(
        &state.pool,
        "committee_categories",
        "CommitteeCategory",
        input.committee_category_id,
    )
    .await?;
    ensure_exists_opt(&state.pool, "faculty", "Faculty", input.faculty_id).await?;

    let form = GrievanceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        grievance_id = form.id,
        reference_number = %form.reference_number,
        "Grievance received"
    );
    Ok((StatusCode::CREATED, Json(form)))
}

/// GET /api/v1/grievances/by-reference/{reference_number}
pub async fn grievance_status(
    State(state): State<AppState>,
    Path(reference_number): Path<Uuid>,
) -> AppResult<Json<GrievanceStatusDto>> {
    let form = GrievanceRepo::find_by_reference(&state.pool, reference_number)
        .await?
        .ok_or_else(|| {
            AppError::not_found_by("Grievance", "reference_number", reference_number.to_string())
        })?;
    Ok(Json(form.into()))
}
