//! Route definitions for news and events plus their tags, images and
//! page metadata.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Routes mounted at `/news-events`.
///
/// ```text
/// GET    /        -> list (query: limit)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list).post(news::create))
        .route(
            "/{id}",
            get(news::get_by_id).put(news::update).delete(news::delete),
        )
}

/// Routes mounted at `/news-tags`.
pub fn tag_router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_tags).post(news::create_tag))
        .route("/{id}", delete(news::delete_tag))
}

/// Routes mounted at `/news-images`.
pub fn image_router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_images).post(news::create_image))
        .route(
            "/{id}",
            put(news::update_image).delete(news::delete_image),
        )
}

/// Routes mounted at `/page-metadata`.
pub fn metadata_router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_metadata).post(news::create_metadata))
        .route(
            "/{id}",
            get(news::get_metadata)
                .put(news::update_metadata)
                .delete(news::delete_metadata),
        )
}
