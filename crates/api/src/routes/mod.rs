pub mod achievements;
pub mod admin;
pub mod auth;
pub mod careers;
pub mod committees;
pub mod courses;
pub mod departments;
pub mod faculty;
pub mod forms;
pub mod health;
pub mod news;
pub mod placements;

use axum::routing::get;
use axum::Router;
use campus_db::repositories::Section;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::handlers::{course, department, section};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                       login (public)
/// /auth/refresh                                     refresh (public)
/// /auth/logout                                      logout (requires auth)
///
/// /admin/models                                     admin model registry
/// /admin/departments/{id}/available-courses         courses not yet in a program
/// /admin/departments/{id}/programs                  create program (POST)
/// /admin/departments/{id}/programs/order            reorder programs (PUT)
/// /admin/contact-forms                              inbox
/// /admin/contact-forms/{id}/mail-sent               flag as mailed (PUT)
/// /admin/career-forms                               inbox
/// /admin/grievances                                 inbox
/// /admin/grievances/{id}/status                     change status (PUT)
/// /admin/users                                      list, create (admin only)
/// /admin/media                                      upload (POST, multipart)
///
/// /departments                                      list, create
/// /departments/{id}                                 get, update, delete
/// /departments/by-slug/{slug}                       get by slug
/// /departments/{id}/courses                         courses of a department
/// /departments/{id}/faculty                         faculty of a department
/// /departments/{id}/{section}                       list, create
/// /departments/{id}/{section}/{item_id}             get, update, delete
/// /department-contacts                              list, create
/// /department-contacts/{id}                         get, update, delete
/// /statistics/featured                              featured department statistics
///
/// /courses                                          list, create
/// /courses/{id}                                     get, update, delete
/// /courses/by-slug/{slug}                           get by slug
/// /courses/without-department                       unattached courses
/// /courses/{id}/{section}                           list, create
/// /courses/{id}/{section}/{item_id}                 get, update, delete
/// /courses/{id}/about/{item_id}/numbers             list, create
/// /courses/{id}/about/{item_id}/numbers/{number_id} update, delete
/// /course-numbers/featured                          featured course numbers
///
/// /designations                                     list, create
/// /designations/{id}                                get, update, delete
/// /designations/{id}/faculty                        faculty holding it
/// /faculty                                          list, create
/// /faculty/{id}                                     get, update, delete
/// /faculty/by-name/{name}                           get by name
/// /faculty/search/{term}                            search
/// /faculty/{id}/banners                             list, create
/// /faculty/{id}/banners/{item_id}                   delete
///
/// /committee-categories[/{id}]                      CRUD
/// /committee-members[/{id}]                         CRUD
///
/// /news-events[/{id}]                               CRUD
/// /news-tags                                        list, create
/// /news-tags/{id}                                   delete
/// /news-images                                      list, create
/// /news-images/{id}                                 update, delete
/// /page-metadata[/{id}]                             CRUD
///
/// /college-achievements[/{id}]                      CRUD
/// /student-achievements[/{id}]                      CRUD
///
/// /companies[/{id}]                                 CRUD
/// /career-openings[/{id}]                           CRUD
/// /career-successes[/{id}]                          CRUD
///
/// /placement-stats[/{id}]                           CRUD
/// /placement-images[/{id}]                          CRUD
/// /research-stats[/{id}]                            CRUD
///
/// /contact-forms                                    submit (POST)
/// /career-forms                                     submit (POST)
/// /grievances                                       submit (POST)
/// /grievances/by-reference/{reference_number}       status lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        // Departments (also nests sections, courses and faculty by department).
        .nest("/departments", departments::router())
        .nest("/department-contacts", departments::contact_router())
        .route("/statistics/featured", get(department::featured_statistics))
        // Courses (also nests sections and about-section numbers).
        .nest("/courses", courses::router())
        .route("/course-numbers/featured", get(course::featured_numbers))
        .nest("/designations", faculty::designation_router())
        .nest("/faculty", faculty::router())
        .nest("/committee-categories", committees::category_router())
        .nest("/committee-members", committees::member_router())
        .nest("/news-events", news::router())
        .nest("/news-tags", news::tag_router())
        .nest("/news-images", news::image_router())
        .nest("/page-metadata", news::metadata_router())
        .nest("/college-achievements", achievements::college_router())
        .nest("/student-achievements", achievements::student_router())
        .nest("/companies", careers::company_router())
        .nest("/career-openings", careers::opening_router())
        .nest("/career-successes", careers::success_router())
        .nest("/placement-stats", placements::stat_router())
        .nest("/placement-images", placements::image_router())
        .nest("/research-stats", placements::research_router())
        .merge(forms::router())
}

/// Full CRUD for one section type, mounted at `/{parent_id}/<section>`.
///
/// ```text
/// GET    /             -> section::list
/// POST   /             -> section::create
/// GET    /{item_id}    -> section::get_by_id
/// PUT    /{item_id}    -> section::update
/// DELETE /{item_id}    -> section::delete
/// ```
pub(crate) fn section_routes<S>() -> Router<AppState>
where
    S: Section + Serialize + Sync,
    S::Create: DeserializeOwned + Validate + Send + 'static,
    S::Update: DeserializeOwned + Validate + Send + 'static,
{
    Router::new()
        .route("/", get(section::list::<S>).post(section::create::<S>))
        .route(
            "/{item_id}",
            get(section::get_by_id::<S>)
                .put(section::update::<S>)
                .delete(section::delete::<S>),
        )
}
