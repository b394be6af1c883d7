//! Public form submission routes, merged at the `/api/v1` root.
//!
//! Submitted forms are read back only through `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::form;
use crate::state::AppState;

/// ```text
/// POST /contact-forms                                 -> submit_contact
/// POST /career-forms                                  -> submit_career
/// POST /grievances                                    -> submit_grievance
/// GET  /grievances/by-reference/{reference_number}    -> grievance_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact-forms", post(form::submit_contact))
        .route("/career-forms", post(form::submit_career))
        .route("/grievances", post(form::submit_grievance))
        .route(
            "/grievances/by-reference/{reference_number}",
            get(form::grievance_status),
        )
}
