//! Route definitions for `/designations` and `/faculty`.

use axum::routing::{delete, get};
use axum::Router;
use campus_db::models::faculty::FacultyBanner;

use crate::handlers::{faculty, section};
use crate::state::AppState;

/// Routes mounted at `/designations`.
///
/// ```text
/// GET    /              -> list_designations
/// POST   /              -> create_designation
/// GET    /{id}          -> get_designation
/// PUT    /{id}          -> update_designation
/// DELETE /{id}          -> delete_designation
/// GET    /{id}/faculty  -> list_by_designation
/// ```
pub fn designation_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(faculty::list_designations).post(faculty::create_designation),
        )
        .route(
            "/{id}",
            get(faculty::get_designation)
                .put(faculty::update_designation)
                .delete(faculty::delete_designation),
        )
        .route("/{id}/faculty", get(faculty::list_by_designation))
}

/// Routes mounted at `/faculty`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /by-name/{name}          -> get_by_name
/// GET    /search/{term}           -> search
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/banners            -> section::list
/// POST   /{id}/banners            -> section::create
/// DELETE /{id}/banners/{item_id}  -> section::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faculty::list).post(faculty::create))
        .route("/by-name/{name}", get(faculty::get_by_name))
        .route("/search/{term}", get(faculty::search))
        .route(
            "/{id}",
            get(faculty::get_by_id)
                .put(faculty::update)
                .delete(faculty::delete),
        )
        .route(
            "/{id}/banners",
            get(section::list::<FacultyBanner>).post(section::create::<FacultyBanner>),
        )
        .route(
            "/{id}/banners/{item_id}",
            delete(section::delete::<FacultyBanner>),
        )
}
