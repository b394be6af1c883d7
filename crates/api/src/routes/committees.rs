//! Route definitions for `/committee-categories` and `/committee-members`.

use axum::routing::get;
use axum::Router;

use crate::handlers::committee;
use crate::state::AppState;

/// Routes mounted at `/committee-categories`.
///
/// ```text
/// GET    /        -> list_categories
/// POST   /        -> create_category
/// GET    /{id}    -> get_category
/// PUT    /{id}    -> update_category
/// DELETE /{id}    -> delete_category
/// ```
pub fn category_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(committee::list_categories).post(committee::create_category),
        )
        .route(
            "/{id}",
            get(committee::get_category)
                .put(committee::update_category)
                .delete(committee::delete_category),
        )
}

/// Routes mounted at `/committee-members`.
///
/// `GET /` accepts a `category_id` query filter.
pub fn member_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(committee::list_members).post(committee::create_member),
        )
        .route(
            "/{id}",
            get(committee::get_member)
                .put(committee::update_member)
                .delete(committee::delete_member),
        )
}
