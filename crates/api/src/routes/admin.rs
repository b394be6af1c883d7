//! Route definitions for the `/admin` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, media};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// Staff role required throughout; `/users` requires `admin`. Both are
/// enforced by handler extractors.
///
/// ```text
/// GET  /models                                  -> list_models
/// GET  /departments/{id}/available-courses      -> available_courses
/// POST /departments/{id}/programs               -> create_program
/// PUT  /departments/{id}/programs/order         -> reorder_programs
/// GET  /contact-forms                           -> list_contact_forms
/// PUT  /contact-forms/{id}/mail-sent            -> mark_contact_mail_sent
/// GET  /career-forms                            -> list_career_forms
/// GET  /grievances                              -> list_grievances
/// PUT  /grievances/{id}/status                  -> update_grievance_status
/// GET  /users                                   -> list_users
/// POST /users                                   -> create_user
/// POST /media                                   -> media::upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(admin::list_models))
        .route(
            "/departments/{id}/available-courses",
            get(admin::available_courses),
        )
        .route("/departments/{id}/programs", post(admin::create_program))
        .route(
            "/departments/{id}/programs/order",
            put(admin::reorder_programs),
        )
        .route("/contact-forms", get(admin::list_contact_forms))
        .route(
            "/contact-forms/{id}/mail-sent",
            put(admin::mark_contact_mail_sent),
        )
        .route("/career-forms", get(admin::list_career_forms))
        .route("/grievances", get(admin::list_grievances))
        .route(
            "/grievances/{id}/status",
            put(admin::update_grievance_status),
        )
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/media", post(media::upload))
}
