//! Handlers for `/courses`, course about-section numbers and
//! `/course-numbers/featured`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::seo::SeoFields;
use campus_core::types::DbId;
use campus_db::models::course::{Course, CourseFilter, CreateCourse, UpdateCourse};
use campus_db::models::course_section::{
    CourseAbout, CourseNumber, CreateCourseNumber, UpdateCourseNumber,
};
use campus_db::models::department::Department;
use campus_db::models::seo::SeoTable;
use campus_db::repositories::{CourseNumberRepo, CourseRepo, DepartmentRepo, SectionRepo};

use super::{ensure_exists_opt, resolve_slug, SlugScope};
use crate::dto::CourseDetail;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::seo;
use crate::state::AppState;

const ENTITY: &str = "Course";

/// GET /api/v1/courses
///
/// `department` accepts either a numeric id or a department slug.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> AppResult<Json<Vec<Course>>> {
    let department_id = match filter.department.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(resolve_department(&state, raw).await?.id),
    };
    let courses = CourseRepo::list(&state.pool, department_id, filter.search.as_deref()).await?;
    Ok(Json(courses))
}

async fn resolve_department(state: &AppState, raw: &str) -> AppResult<Department> {
    if let Ok(id) = raw.parse::<DbId>() {
        return DepartmentRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Department", id));
    }
    DepartmentRepo::find_by_slug(&state.pool, raw)
        .await?
        .ok_or_else(|| AppError::not_found_by("Department", "slug", raw))
}

/// GET /api/v1/courses/without-department
pub async fn list_without_department(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(CourseRepo::list_without_department(&state.pool).await?))
}

/// GET /api/v1/departments/{id}/courses
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    super::ensure_exists(&state.pool, "departments", "Department", department_id).await?;
    let courses = CourseRepo::list(&state.pool, Some(department_id), None).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseDetail>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(CourseDetail::load(&state.pool, course).await?))
}

/// GET /api/v1/courses/by-slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CourseDetail>> {
    let course = CourseRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found_by(ENTITY, "slug", slug))?;
    Ok(Json(CourseDetail::load(&state.pool, course).await?))
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    ensure_exists_opt(&state.pool, "departments", "Department", input.department_id).await?;

    let name = input.name.as_deref().unwrap_or_default();
    let slug = resolve_slug(&state.pool, SlugScope::Course, input.slug.as_deref(), name, None).await?;

    let course = CourseRepo::create(&state.pool, &input, &slug).await?;
    let course = sync_seo(&state, course, input.seo.as_ref()).await?;

    tracing::info!(course_id = course.id, slug = %course.slug, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCourse>,
) -> AppResult<Json<Course>> {
    ensure_exists_opt(&state.pool, "departments", "Department", input.department_id).await?;

    let slug = match input.slug.as_deref() {
        Some(explicit) => {
            Some(resolve_slug(&state.pool, SlugScope::Course, Some(explicit), "", Some(id)).await?)
        }
        None => None,
    };

    let course = CourseRepo::update(&state.pool, id, &input, slug.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    let course = sync_seo(&state, course, input.seo.as_ref()).await?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CourseRepo::delete(&state.pool, id).await? {
        tracing::info!(course_id = id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

async fn sync_seo(state: &AppState, course: Course, explicit: Option<&SeoFields>) -> AppResult<Course> {
    let department = match course.department_id {
        Some(department_id) => DepartmentRepo::find_by_id(&state.pool, department_id).await?,
        None => None,
    };
    let source = seo::course_source(&course, department.as_ref());
    let changed = seo::store(
        &state.pool,
        SeoTable::Courses,
        course.id,
        explicit,
        &course.seo,
        &source,
        &state.config.site,
    )
    .await?;
    if !changed {
        return Ok(course);
    }
    let id = course.id;
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

// ---------------------------------------------------------------------------
// About-section numbers
// ---------------------------------------------------------------------------

/// 404 unless `about_id` is an about section of `course_id`.
async fn ensure_about(state: &AppState, course_id: DbId, about_id: DbId) -> AppResult<()> {
    SectionRepo::<CourseAbout>::find(&state.pool, course_id, about_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("CourseAbout", about_id))
}

/// GET /api/v1/courses/{id}/about/{about_id}/numbers
pub async fn list_numbers(
    State(state): State<AppState>,
    Path((course_id, about_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Vec<CourseNumber>>> {
    ensure_about(&state, course_id, about_id).await?;
    Ok(Json(SectionRepo::<CourseNumber>::list(&state.pool, about_id).await?))
}

/// POST /api/v1/courses/{id}/about/{about_id}/numbers
pub async fn create_number(
    State(state): State<AppState>,
    Path((course_id, about_id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<CreateCourseNumber>,
) -> AppResult<(StatusCode, Json<CourseNumber>)> {
    ensure_about(&state, course_id, about_id).await?;
    let number = SectionRepo::<CourseNumber>::create(&state.pool, about_id, &input).await?;
    Ok((StatusCode::CREATED, Json(number)))
}

/// PUT /api/v1/courses/{id}/about/{about_id}/numbers/{number_id}
pub async fn update_number(
    State(state): State<AppState>,
    Path((course_id, about_id, id)): Path<(DbId, DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateCourseNumber>,
) -> AppResult<Json<CourseNumber>> {
    ensure_about(&state, course_id, about_id).await?;
    let number = SectionRepo::<CourseNumber>::update(&state.pool, about_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("CourseNumber", id))?;
    Ok(Json(number))
}

/// DELETE /api/v1/courses/{id}/about/{about_id}/numbers/{number_id}
pub async fn delete_number(
    State(state): State<AppState>,
    Path((course_id, about_id, id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_about(&state, course_id, about_id).await?;
    if SectionRepo::<CourseNumber>::delete(&state.pool, about_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("CourseNumber", id))
    }
}

/// GET /api/v1/course-numbers/featured
pub async fn featured_numbers(State(state): State<AppState>) -> AppResult<Json<Vec<CourseNumber>>> {
    Ok(Json(CourseNumberRepo::list_featured(&state.pool).await?))
}
