//! Route definitions for `/departments` and `/department-contacts`.

use axum::routing::get;
use axum::Router;
use campus_db::models::department_section::{
    DepartmentAbout, DepartmentBanner, DepartmentBenefit, DepartmentCta, DepartmentCurriculum,
    DepartmentFacility, DepartmentPoPsoPeo, DepartmentProgram, DepartmentQuickLink,
    DepartmentStatistic,
};

use super::section_routes;
use crate::handlers::{course, department, faculty, section};
use crate::state::AppState;

/// Routes mounted at `/departments`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /by-slug/{slug}                  -> get_by_slug
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// GET    /{id}/courses                    -> course::list_by_department
/// GET    /{id}/faculty                    -> faculty::list_by_department
///
/// GET|POST            /{id}/about                 (and likewise for
/// GET|PUT|DELETE      /{id}/about/{item_id}        statistics, quick-links,
///                                                  curriculum, benefits, ctas,
///                                                  po-pso-peo, facilities,
///                                                  banners)
///
/// GET    /{id}/programs                   -> section::list
/// POST   /{id}/programs                   -> create_program
/// GET    /{id}/programs/{item_id}         -> section::get_by_id
/// PUT    /{id}/programs/{item_id}         -> update_program
/// DELETE /{id}/programs/{item_id}         -> section::delete
/// ```
pub fn router() -> Router<AppState> {
    let program_routes = Router::new()
        .route(
            "/",
            get(section::list::<DepartmentProgram>).post(department::create_program),
        )
        .route(
            "/{item_id}",
            get(section::get_by_id::<DepartmentProgram>)
                .put(department::update_program)
                .delete(section::delete::<DepartmentProgram>),
        );

    Router::new()
        .route("/", get(department::list).post(department::create))
        .route("/by-slug/{slug}", get(department::get_by_slug))
        .route(
            "/{id}",
            get(department::get_by_id)
                .put(department::update)
                .delete(department::delete),
        )
        .route("/{id}/courses", get(course::list_by_department))
        .route("/{id}/faculty", get(faculty::list_by_department))
        .nest("/{id}/about", section_routes::<DepartmentAbout>())
        .nest("/{id}/statistics", section_routes::<DepartmentStatistic>())
        .nest("/{id}/quick-links", section_routes::<DepartmentQuickLink>())
        .nest("/{id}/programs", program_routes)
        .nest("/{id}/curriculum", section_routes::<DepartmentCurriculum>())
        .nest("/{id}/benefits", section_routes::<DepartmentBenefit>())
        .nest("/{id}/ctas", section_routes::<DepartmentCta>())
        .nest("/{id}/po-pso-peo", section_routes::<DepartmentPoPsoPeo>())
        .nest("/{id}/facilities", section_routes::<DepartmentFacility>())
        .nest("/{id}/banners", section_routes::<DepartmentBanner>())
}

/// Routes mounted at `/department-contacts`.
///
/// ```text
/// GET    /        -> list_contacts
/// POST   /        -> create_contact
/// GET    /{id}    -> get_contact
/// PUT    /{id}    -> update_contact
/// DELETE /{id}    -> delete_contact
/// ```
pub fn contact_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(department::list_contacts).post(department::create_contact),
        )
        .route(
            "/{id}",
            get(department::get_contact)
                .put(department::update_contact)
                .delete(department::delete_contact),
        )
}
