//! Route definitions for placement statistics, placement images and
//! research statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::placement;
use crate::state::AppState;

/// Routes mounted at `/placement-stats`.
///
/// ```text
/// GET    /        -> list_placement_stats
/// POST   /        -> create_placement_stat
/// GET    /{id}    -> get_placement_stat
/// PUT    /{id}    -> update_placement_stat
/// DELETE /{id}    -> delete_placement_stat
/// ```
pub fn stat_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(placement::list_placement_stats).post(placement::create_placement_stat),
        )
        .route(
            "/{id}",
            get(placement::get_placement_stat)
                .put(placement::update_placement_stat)
                .delete(placement::delete_placement_stat),
        )
}

/// Routes mounted at `/placement-images`.
pub fn image_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(placement::list_images).post(placement::create_image),
        )
        .route(
            "/{id}",
            get(placement::get_image)
                .put(placement::update_image)
                .delete(placement::delete_image),
        )
}

/// Routes mounted at `/research-stats`.
pub fn research_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(placement::list_research_stats).post(placement::create_research_stat),
        )
        .route(
            "/{id}",
            get(placement::get_research_stat)
                .put(placement::update_research_stat)
                .delete(placement::delete_research_stat),
        )
}
