//! Route definitions for companies, career openings and career successes.

use axum::routing::get;
use axum::Router;

use crate::handlers::career;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /        -> list_companies
/// POST   /        -> create_company
/// GET    /{id}    -> get_company
/// PUT    /{id}    -> update_company
/// DELETE /{id}    -> delete_company
/// ```
pub fn company_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(career::list_companies).post(career::create_company),
        )
        .route(
            "/{id}",
            get(career::get_company)
                .put(career::update_company)
                .delete(career::delete_company),
        )
}

/// Routes mounted at `/career-openings`.
pub fn opening_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(career::list_openings).post(career::create_opening),
        )
        .route(
            "/{id}",
            get(career::get_opening)
                .put(career::update_opening)
                .delete(career::delete_opening),
        )
}

/// Routes mounted at `/career-successes`.
pub fn success_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(career::list_successes).post(career::create_success),
        )
        .route(
            "/{id}",
            get(career::get_success)
                .put(career::update_success)
                .delete(career::delete_success),
        )
}
