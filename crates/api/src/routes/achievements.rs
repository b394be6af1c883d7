//! Route definitions for college and student achievements.
//!
//! Both kinds share one table and one set of handlers; the router picks
//! the kind through the handler's type parameter.

use axum::routing::get;
use axum::Router;

use crate::handlers::achievement::{self, AchievementScope, College, Student};
use crate::state::AppState;

fn scoped<K: AchievementScope>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(achievement::list::<K>).post(achievement::create::<K>),
        )
        .route(
            "/{id}",
            get(achievement::get_by_id::<K>)
                .put(achievement::update::<K>)
                .delete(achievement::delete::<K>),
        )
}

/// Routes mounted at `/college-achievements`.
///
/// ```text
/// GET    /        -> list::<College>
/// POST   /        -> create::<College>
/// GET    /{id}    -> get_by_id::<College>
/// PUT    /{id}    -> update::<College>
/// DELETE /{id}    -> delete::<College>
/// ```
pub fn college_router() -> Router<AppState> {
    scoped::<College>()
}

/// Routes mounted at `/student-achievements`.
pub fn student_router() -> Router<AppState> {
    scoped::<Student>()
}
