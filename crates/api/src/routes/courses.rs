//! Route definitions for the `/courses` resource.

use axum::routing::{get, put};
use axum::Router;
use campus_db::models::course_section::{
    CourseAbout, CourseBanner, CourseBenefit, CourseContact, CourseCta, CourseCurriculum,
    CourseLab, CourseQuickLink, CourseSubject,
};

use super::section_routes;
use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                                            -> list
/// POST   /                                            -> create
/// GET    /without-department                          -> list_without_department
/// GET    /by-slug/{slug}                              -> get_by_slug
/// GET    /{id}                                        -> get_by_id
/// PUT    /{id}                                        -> update
/// DELETE /{id}                                        -> delete
///
/// GET|POST        /{id}/{section}                     generic section CRUD for
/// GET|PUT|DELETE  /{id}/{section}/{item_id}           about, quick-links, subjects,
///                                                     labs, curriculum, benefits,
///                                                     contacts, ctas, banners
///
/// GET    /{id}/about/{item_id}/numbers                -> list_numbers
/// POST   /{id}/about/{item_id}/numbers                -> create_number
/// PUT    /{id}/about/{item_id}/numbers/{number_id}    -> update_number
/// DELETE /{id}/about/{item_id}/numbers/{number_id}    -> delete_number
/// ```
pub fn router() -> Router<AppState> {
    let number_routes = Router::new()
        .route("/", get(course::list_numbers).post(course::create_number))
        .route(
            "/{number_id}",
            put(course::update_number).delete(course::delete_number),
        );

    Router::new()
        .route("/", get(course::list).post(course::create))
        .route("/without-department", get(course::list_without_department))
        .route("/by-slug/{slug}", get(course::get_by_slug))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .nest("/{id}/about/{item_id}/numbers", number_routes)
        .nest("/{id}/about", section_routes::<CourseAbout>())
        .nest("/{id}/quick-links", section_routes::<CourseQuickLink>())
        .nest("/{id}/subjects", section_routes::<CourseSubject>())
        .nest("/{id}/labs", section_routes::<CourseLab>())
        .nest("/{id}/curriculum", section_routes::<CourseCurriculum>())
        .nest("/{id}/benefits", section_routes::<CourseBenefit>())
        .nest("/{id}/contacts", section_routes::<CourseContact>())
        .nest("/{id}/ctas", section_routes::<CourseCta>())
        .nest("/{id}/banners", section_routes::<CourseBanner>())
}
