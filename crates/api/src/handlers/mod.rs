//! HTTP handlers, one module per resource family.

pub mod achievement;
pub mod admin;
pub mod auth;
pub mod career;
pub mod committee;
pub mod course;
pub mod department;
pub mod faculty;
pub mod form;
pub mod media;
pub mod news;
pub mod placement;
pub mod section;

use campus_core::error::CoreError;
use campus_core::slug::{slugify, with_suffix};
use campus_core::types::DbId;
use campus_db::repositories::section as section_repo;
use campus_db::repositories::{CourseRepo, DepartmentRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// 404 unless `table` has a row `id`. Used for `*_id` fields in request
/// bodies, which would otherwise surface as foreign key violations.
pub(crate) async fn ensure_exists(
    pool: &PgPool,
    table: &'static str,
    entity: &'static str,
    id: DbId,
) -> AppResult<()> {
    if section_repo::exists(pool, table, id).await? {
        Ok(())
    } else {
        Err(AppError::not_found(entity, id))
    }
}

/// [`ensure_exists`] for an optional reference.
pub(crate) async fn ensure_exists_opt(
    pool: &PgPool,
    table: &'static str,
    entity: &'static str,
    id: Option<DbId>,
) -> AppResult<()> {
    match id {
        Some(id) => ensure_exists(pool, table, entity, id).await,
        None => Ok(()),
    }
}

/// Which table a slug must be unique in.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SlugScope {
    Department,
    Course,
}

/// Upper bound on `-2`, `-3`, ... suffix attempts.
const MAX_SLUG_ATTEMPTS: u32 = 1000;

/// Slug for a new or renamed row.
///
/// An explicit slug is normalized and used as is, so a taken one is reported
/// as a conflict by the unique constraint. A generated slug gets the first
/// free numeric suffix.
pub(crate) async fn resolve_slug(
    pool: &PgPool,
    scope: SlugScope,
    explicit: Option<&str>,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<String> {
    if let Some(explicit) = explicit.filter(|s| !s.trim().is_empty()) {
        let slug = slugify(explicit);
        if slug.is_empty() {
            return Err(CoreError::Validation(
                "slug must contain at least one letter or digit".into(),
            )
            .into());
        }
        return Ok(slug);
    }

    let base = slugify(name);
    if base.is_empty() {
        return Err(CoreError::Validation(
            "name must contain at least one letter or digit".into(),
        )
        .into());
    }

    for attempt in 0..MAX_SLUG_ATTEMPTS {
        let candidate = with_suffix(&base, attempt);
        let taken = match scope {
            SlugScope::Department => DepartmentRepo::slug_exists(pool, &candidate, exclude_id).await?,
            SlugScope::Course => CourseRepo::slug_exists(pool, &candidate, exclude_id).await?,
        };
        if !taken {
            return Ok(candidate);
        }
    }
    Err(CoreError::Conflict(format!("No free slug for '{base}'")).into())
}
