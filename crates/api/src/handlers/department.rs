//! Handlers for `/departments`, `/department-contacts`,
//! `/statistics/featured` and the department program section.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::seo::SeoFields;
use campus_core::types::DbId;
use campus_db::models::department::{
    CreateDepartment, CreateDepartmentContact, Department, DepartmentContact, DepartmentFilter,
    UpdateDepartment, UpdateDepartmentContact,
};
use campus_db::models::department_section::{
    CreateDepartmentProgram, DepartmentProgram, DepartmentStatistic, UpdateDepartmentProgram,
};
use campus_db::models::seo::SeoTable;
use campus_db::repositories::{
    DepartmentContactRepo, DepartmentProgramRepo, DepartmentRepo, DepartmentStatisticRepo,
    SectionRepo,
};

use super::section::ensure_parent;
use super::{ensure_exists_opt, resolve_slug, SlugScope};
use crate::dto::DepartmentDetail;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::seo;
use crate::state::AppState;

const ENTITY: &str = "Department";
const CONTACT_ENTITY: &str = "DepartmentContact";

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

/// GET /api/v1/departments
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> AppResult<Json<Vec<Department>>> {
    let departments = DepartmentRepo::list(&state.pool, &filter).await?;
    Ok(Json(departments))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DepartmentDetail>> {
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(DepartmentDetail::load(&state.pool, department).await?))
}

/// GET /api/v1/departments/by-slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DepartmentDetail>> {
    let department = DepartmentRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found_by(ENTITY, "slug", slug))?;
    Ok(Json(DepartmentDetail::load(&state.pool, department).await?))
}

/// POST /api/v1/departments
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    ensure_exists_opt(&state.pool, "department_contacts", CONTACT_ENTITY, input.contact_id).await?;

    let name = input.name.as_deref().unwrap_or_default();
    let slug = resolve_slug(
        &state.pool,
        SlugScope::Department,
        input.slug.as_deref(),
        name,
        None,
    )
    .await?;

    let department = DepartmentRepo::create(&state.pool, &input, &slug).await?;
    let department = sync_seo(&state, department, input.seo.as_ref()).await?;

    tracing::info!(department_id = department.id, slug = %department.slug, "Department created");
    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /api/v1/departments/{id}
///
/// The slug only changes when the body carries one.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    ensure_exists_opt(&state.pool, "department_contacts", CONTACT_ENTITY, input.contact_id).await?;

    let slug = match input.slug.as_deref() {
        Some(explicit) => Some(
            resolve_slug(&state.pool, SlugScope::Department, Some(explicit), "", Some(id)).await?,
        ),
        None => None,
    };

    let department = DepartmentRepo::update(&state.pool, id, &input, slug.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    let department = sync_seo(&state, department, input.seo.as_ref()).await?;
    Ok(Json(department))
}

/// DELETE /api/v1/departments/{id}
///
/// Sections, programs and news cascade; courses are detached.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DepartmentRepo::delete(&state.pool, id).await? {
        tracing::info!(department_id = id, "Department deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

async fn sync_seo(
    state: &AppState,
    department: Department,
    explicit: Option<&SeoFields>,
) -> AppResult<Department> {
    let source = seo::department_source(&department);
    let changed = seo::store(
        &state.pool,
        SeoTable::Departments,
        department.id,
        explicit,
        &department.seo,
        &source,
        &state.config.site,
    )
    .await?;
    if !changed {
        return Ok(department);
    }
    let id = department.id;
    DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

// ---------------------------------------------------------------------------
// Featured statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/statistics/featured
pub async fn featured_statistics(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentStatistic>>> {
    Ok(Json(DepartmentStatisticRepo::list_featured(&state.pool).await?))
}

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

/// Insert a program after checking its course link.
///
/// Shared by the public section route and the admin inline editor.
pub(crate) async fn insert_program(
    state: &AppState,
    department_id: DbId,
    input: &CreateDepartmentProgram,
) -> AppResult<DepartmentProgram> {
    ensure_parent::<DepartmentProgram>(state, department_id).await?;
    check_course_link(state, department_id, input.course_id, None).await?;
    let program = SectionRepo::<DepartmentProgram>::create(&state.pool, department_id, input).await?;
    tracing::info!(
        department_id,
        program_id = program.id,
        display_order = program.display_order,
        "Program created"
    );
    Ok(program)
}

/// A course may back at most one program per department.
async fn check_course_link(
    state: &AppState,
    department_id: DbId,
    course_id: Option<DbId>,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    let Some(course_id) = course_id else {
        return Ok(());
    };
    super::ensure_exists(&state.pool, "courses", "Course", course_id).await?;
    if DepartmentProgramRepo::course_already_linked(&state.pool, department_id, course_id, exclude_id)
        .await?
    {
        return Err(CoreError::Conflict(format!(
            "Course {course_id} is already associated with this department"
        ))
        .into());
    }
    Ok(())
}

/// POST /api/v1/departments/{id}/programs
pub async fn create_program(
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateDepartmentProgram>,
) -> AppResult<(StatusCode, Json<DepartmentProgram>)> {
    let program = insert_program(&state, department_id, &input).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

/// PUT /api/v1/departments/{id}/programs/{program_id}
pub async fn update_program(
    State(state): State<AppState>,
    Path((department_id, id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateDepartmentProgram>,
) -> AppResult<Json<DepartmentProgram>> {
    check_course_link(&state, department_id, input.course_id, Some(id)).await?;
    let program = SectionRepo::<DepartmentProgram>::update(&state.pool, department_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("DepartmentProgram", id))?;
    Ok(Json(program))
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// GET /api/v1/department-contacts
pub async fn list_contacts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentContact>>> {
    Ok(Json(DepartmentContactRepo::list(&state.pool).await?))
}

/// GET /api/v1/department-contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DepartmentContact>> {
    let contact = DepartmentContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(CONTACT_ENTITY, id))?;
    Ok(Json(contact))
}

/// POST /api/v1/department-contacts
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDepartmentContact>,
) -> AppResult<(StatusCode, Json<DepartmentContact>)> {
    let contact = DepartmentContactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/v1/department-contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDepartmentContact>,
) -> AppResult<Json<DepartmentContact>> {
    let contact = DepartmentContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(CONTACT_ENTITY, id))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/department-contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DepartmentContactRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(CONTACT_ENTITY, id))
    }
}
