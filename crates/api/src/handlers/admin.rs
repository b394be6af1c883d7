//! Handlers for `/admin`: model registry, program ordering inline, form
//! inboxes and user management.
//!
//! Every handler requires a staff token; user management requires `admin`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::admin::{ModelAdmin, MODEL_ADMINS};
use campus_core::error::CoreError;
use campus_core::ordering::plan_reorder;
use campus_core::roles::ROLE_EDITOR;
use campus_core::types::DbId;
use campus_db::models::course::Course;
use campus_db::models::department_section::{CreateDepartmentProgram, DepartmentProgram};
use campus_db::models::form::{
    CareerForm, CareerFormFilter, ContactForm, ContactFormFilter, GrievanceFilter, GrievanceForm,
    UpdateGrievanceStatus,
};
use campus_db::models::user::{CreateUser, NewUserRequest, UserResponse};
use campus_db::repositories::{
    CareerFormRepo, ContactFormRepo, CourseRepo, DepartmentProgramRepo, GrievanceRepo, RoleRepo,
    SectionRepo, UserRepo,
};
use serde::Deserialize;
use validator::Validate;

use super::department::insert_program;
use super::ensure_exists;
use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Model registry
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/models
pub async fn list_models(
    RequireStaff(_): RequireStaff,
) -> Json<DataResponse<&'static [ModelAdmin]>> {
    Json(DataResponse { data: MODEL_ADMINS })
}

// ---------------------------------------------------------------------------
// Department programs inline
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/departments/{id}/available-courses
///
/// Courses that no program of this department links yet.
pub async fn available_courses(
    RequireStaff(_): RequireStaff,
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    ensure_exists(&state.pool, "departments", "Department", department_id).await?;
    let courses = CourseRepo::list_available_for_department(&state.pool, department_id).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// POST /api/v1/admin/departments/{id}/programs
pub async fn create_program(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateDepartmentProgram>,
) -> AppResult<(StatusCode, Json<DataResponse<DepartmentProgram>>)> {
    let program = insert_program(&state, department_id, &input).await?;
    tracing::info!(user_id = user.user_id, program_id = program.id, "Admin added program");
    Ok((StatusCode::CREATED, Json(DataResponse { data: program })))
}

/// Body of `PUT /admin/departments/{id}/programs/order`.
#[derive(Debug, Deserialize, Validate)]
pub struct ProgramOrderRequest {
    /// Every program id of the department, in the desired order.
    #[validate(required)]
    pub ids: Option<Vec<DbId>>,
}

/// PUT /api/v1/admin/departments/{id}/programs/order
///
/// Positions are rewritten as 1, 2, 3, ... following `ids`.
pub async fn reorder_programs(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ProgramOrderRequest>,
) -> AppResult<Json<DataResponse<Vec<DepartmentProgram>>>> {
    ensure_exists(&state.pool, "departments", "Department", department_id).await?;

    let requested = input.ids.unwrap_or_default();
    let existing = DepartmentProgramRepo::list_ids(&state.pool, department_id).await?;
    let positions = plan_reorder(&existing, &requested)?;
    DepartmentProgramRepo::apply_order(&state.pool, department_id, &positions).await?;

    tracing::info!(
        user_id = user.user_id,
        department_id,
        count = positions.len(),
        "Admin reordered programs"
    );
    let programs = SectionRepo::<DepartmentProgram>::list(&state.pool, department_id).await?;
    Ok(Json(DataResponse { data: programs }))
}

// ---------------------------------------------------------------------------
// Form inboxes
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/contact-forms
pub async fn list_contact_forms(
    RequireStaff(_): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<ContactFormFilter>,
) -> AppResult<Json<DataResponse<Vec<ContactForm>>>> {
    let forms = ContactFormRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// PUT /api/v1/admin/contact-forms/{id}/mail-sent
pub async fn mark_contact_mail_sent(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ContactForm>>> {
    let form = ContactFormRepo::mark_mail_sent(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ContactForm", id))?;
    tracing::info!(user_id = user.user_id, contact_form_id = id, "Contact form marked as mailed");
    Ok(Json(DataResponse { data: form }))
}

/// GET /api/v1/admin/career-forms
pub async fn list_career_forms(
    RequireStaff(_): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<CareerFormFilter>,
) -> AppResult<Json<DataResponse<Vec<CareerForm>>>> {
    let forms = CareerFormRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// GET /api/v1/admin/grievances
pub async fn list_grievances(
    RequireStaff(_): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<GrievanceFilter>,
) -> AppResult<Json<DataResponse<Vec<GrievanceForm>>>> {
    let forms = GrievanceRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// PUT /api/v1/admin/grievances/{id}/status
pub async fn update_grievance_status(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateGrievanceStatus>,
) -> AppResult<Json<DataResponse<GrievanceForm>>> {
    let status = input.status.unwrap_or_default();
    let form = GrievanceRepo::update_status(&state.pool, id, &status)
        .await?
        .ok_or_else(|| AppError::not_found("Grievance", id))?;
    tracing::info!(
        user_id = user.user_id,
        grievance_id = id,
        status = %form.status,
        "Grievance status changed"
    );
    Ok(Json(DataResponse { data: form }))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/users
pub async fn list_users(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let (users, roles) = tokio::try_join!(
        UserRepo::list(&state.pool),
        RoleRepo::list(&state.pool),
    )?;
    let data = users
        .iter()
        .map(|user| {
            let role = roles
                .iter()
                .find(|r| r.id == user.role_id)
                .map_or("unknown", |r| r.name.as_str());
            UserResponse::from_user(user, role)
        })
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/users
///
/// `role` defaults to `editor`.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let password = input.password.unwrap_or_default();
    validate_password_strength(&password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role_name = input
        .role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(ROLE_EDITOR);
    let role = RoleRepo::find_by_name(&state.pool, role_name)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Unknown role '{role_name}'")))?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username.unwrap_or_default().trim().to_string(),
            email: input.email.unwrap_or_default().trim().to_string(),
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(
        admin_id = admin.user_id,
        user_id = user.id,
        role = %role.name,
        "Admin user created"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from_user(&user, &role.name),
        }),
    ))
}
