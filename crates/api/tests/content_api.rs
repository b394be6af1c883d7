//! HTTP-level tests for departments, courses and faculty: CRUD, slugs,
//! page sections, generated SEO and lookups.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_department(pool: &PgPool, name: &str) -> i64 {
    create(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({ "name": name, "ug": true, "about": "<p>Teaching and research.</p>" }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_department_generates_slug_and_seo(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({ "name": "Computer Science", "ug": true, "pg": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["slug"], "computer-science");
    assert_eq!(created["seo"]["meta_title"], "Computer Science | Test College");
    assert_eq!(
        created["seo"]["canonical_url"],
        "https://college.test/departments/computer-science"
    );

    let response = get(
        common::build_test_app(pool),
        "/api/v1/departments/by-slug/computer-science",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], created["id"]);
    assert!(json["about_sections"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_name_gets_suffixed_slug(pool: PgPool) {
    create_department(&pool, "Physics").await;
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/departments",
        json!({ "name": "Physics" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["slug"], "physics-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_duplicate_slug_is_409(pool: PgPool) {
    create_department(&pool, "Physics").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/departments",
        json!({ "name": "Applied Physics", "slug": "physics" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_slug_on_update_is_rejected_and_kept(pool: PgPool) {
    let id = create_department(&pool, "Chemistry").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{id}"),
        json!({ "slug": "  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "slug is required");

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/departments/{id}")).await,
    )
    .await;
    assert_eq!(json["slug"], "chemistry");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_name_is_400_and_nothing_is_written(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({ "ug": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_department_search_is_case_insensitive_substring(pool: PgPool) {
    create_department(&pool, "Computer Science").await;
    create_department(&pool, "English").await;

    let json = body_json(
        get(common::build_test_app(pool), "/api/v1/departments?search=COMP").await,
    )
    .await;
    let found = json.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Computer Science");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_contact_is_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/departments",
        json!({ "name": "Chemistry", "contact_id": 999_999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seo_is_filled_once_and_explicit_values_win(pool: PgPool) {
    let id = create_department(&pool, "Mathematics").await;

    // Renaming does not regenerate columns that already hold a value.
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{id}"),
        json!({ "name": "Pure Mathematics" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Pure Mathematics");
    assert_eq!(json["seo"]["meta_title"], "Mathematics | Test College");

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/departments/{id}"),
        json!({ "seo": { "meta_title": "Study Mathematics" } }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["seo"]["meta_title"], "Study Mathematics");
    assert_eq!(json["seo"]["robots"], "index, follow");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_whitespace_seo_values_are_generated(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({ "name": "Computer Science", "seo": { "meta_title": "   " } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/departments/{id}")).await,
    )
    .await;
    assert_eq!(json["seo"]["meta_title"], "Computer Science | Test College");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_department_cascades_to_sections(pool: PgPool) {
    let id = create_department(&pool, "Biology").await;
    create(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{id}/quick-links"),
        json!({ "name": "Syllabus", "link": "https://college.test/bio/syllabus.pdf" }),
    )
    .await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/departments/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department_quick_links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let response = delete(common::build_test_app(pool), &format!("/api/v1/departments/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_section_under_unknown_department_is_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/departments/999999/about",
        json!({ "heading": "About us" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/api/v1/departments/999999/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_statistics_append_after_the_last_position(pool: PgPool) {
    let id = create_department(&pool, "Economics").await;
    let uri = format!("/api/v1/departments/{id}/statistics");

    let response = post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "name": "Alumni", "number": "1200", "suffix": "+", "display_order": 4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "name": "Placement", "number": "95", "suffix": "%", "featured": true }),
    )
    .await;
    assert_eq!(body_json(response).await["display_order"], 5);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    let list = body_json(response).await;
    assert_eq!(list[0]["name"], "Alumni");
    assert_eq!(list[1]["name"], "Placement");

    let response = get(common::build_test_app(pool), "/api/v1/statistics/featured").await;
    let featured = body_json(response).await;
    assert_eq!(featured.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_statistic_suffix_is_400(pool: PgPool) {
    let id = create_department(&pool, "History").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/departments/{id}/statistics"),
        json!({ "name": "Books", "number": "10", "suffix": "k" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_section_item_is_scoped_to_its_parent(pool: PgPool) {
    let first = create_department(&pool, "Botany").await;
    let second = create_department(&pool, "Zoology").await;
    let item = create(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{first}/benefits"),
        json!({ "text": "Field trips" }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/departments/{second}/benefits/{item}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_program_cannot_link_the_same_course_twice(pool: PgPool) {
    let dept = create_department(&pool, "Commerce").await;
    let course = create(
        common::build_test_app(pool.clone()),
        "/api/v1/courses",
        json!({ "name": "B.Com", "department_id": dept }),
    )
    .await;
    let uri = format!("/api/v1/departments/{dept}/programs");

    let response = post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "name": "B.Com", "course_id": course }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        common::build_test_app(pool),
        &uri,
        json!({ "name": "B.Com (Honours)", "course_id": course }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_courses_filter_by_department_id_or_slug(pool: PgPool) {
    let dept = create_department(&pool, "Electronics").await;
    create(
        common::build_test_app(pool.clone()),
        "/api/v1/courses",
        json!({ "name": "B.Sc Electronics", "department_id": dept }),
    )
    .await;
    create(
        common::build_test_app(pool.clone()),
        "/api/v1/courses",
        json!({ "name": "Open Elective" }),
    )
    .await;

    let by_slug = body_json(
        get(common::build_test_app(pool.clone()), "/api/v1/courses?department=electronics").await,
    )
    .await;
    let by_id = body_json(
        get(common::build_test_app(pool.clone()), &format!("/api/v1/courses?department={dept}")).await,
    )
    .await;
    assert_eq!(by_slug.as_array().unwrap().len(), 1);
    assert_eq!(by_slug, by_id);

    let orphans = body_json(
        get(common::build_test_app(pool.clone()), "/api/v1/courses/without-department").await,
    )
    .await;
    assert_eq!(orphans[0]["name"], "Open Elective");

    let response = get(common::build_test_app(pool), "/api/v1/courses?department=nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_detail_nests_numbers_under_about(pool: PgPool) {
    let course = create(
        common::build_test_app(pool.clone()),
        "/api/v1/courses",
        json!({ "name": "MBA", "about_the_course": "Two years of management." }),
    )
    .await;
    let about = create(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course}/about"),
        json!({ "heading": "Why MBA" }),
    )
    .await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course}/about/{about}/numbers"),
        json!({ "number": 40, "symbol": "+", "text": "Recruiters", "featured": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(
        get(common::build_test_app(pool.clone()), "/api/v1/courses/by-slug/mba").await,
    )
    .await;
    assert_eq!(json["about_sections"][0]["heading"], "Why MBA");
    assert_eq!(json["about_sections"][0]["numbers"][0]["text"], "Recruiters");

    let featured = body_json(
        get(common::build_test_app(pool), "/api/v1/course-numbers/featured").await,
    )
    .await;
    assert_eq!(featured.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_numbers_under_foreign_about_section_are_404(pool: PgPool) {
    let first = create(common::build_test_app(pool.clone()), "/api/v1/courses", json!({ "name": "MCA" })).await;
    let second = create(common::build_test_app(pool.clone()), "/api/v1/courses", json!({ "name": "BCA" })).await;
    let about = create(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{first}/about"),
        json!({ "heading": "Overview" }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{second}/about/{about}/numbers"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Faculty
// ---------------------------------------------------------------------------

async fn seed_faculty(pool: &PgPool) -> (i64, i64) {
    let dept = create_department(pool, "Computer Applications").await;
    let designation = create(
        common::build_test_app(pool.clone()),
        "/api/v1/designations",
        json!({ "name": "Professor" }),
    )
    .await;
    let faculty = create(
        common::build_test_app(pool.clone()),
        "/api/v1/faculty",
        json!({
            "name": "Anita Rao",
            "designation_id": designation,
            "department_id": dept,
            "qualification": "PhD in Computer Science",
            "mail_id": "anita.rao@college.test",
        }),
    )
    .await;
    (designation, faculty)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faculty_search_matches_qualification(pool: PgPool) {
    seed_faculty(&pool).await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/faculty/search/comp").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["name"], "Anita Rao");

    let response = get(common::build_test_app(pool), "/api/v1/faculty/search/astronomy").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faculty_detail_and_name_lookup(pool: PgPool) {
    let (designation, faculty) = seed_faculty(&pool).await;

    let json = body_json(
        get(common::build_test_app(pool.clone()), &format!("/api/v1/faculty/{faculty}")).await,
    )
    .await;
    assert_eq!(json["designation"]["name"], "Professor");
    assert_eq!(json["department"]["slug"], "computer-applications");
    assert_eq!(json["seo"]["meta_title"], "Anita Rao | Test College");

    let response = get(common::build_test_app(pool.clone()), "/api/v1/faculty/by-name/Anita%20Rao").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/designations/{designation}")).await,
    )
    .await;
    assert_eq!(json["faculty_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faculty_requires_existing_designation(pool: PgPool) {
    let dept = create_department(&pool, "Statistics").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/faculty",
        json!({ "name": "K. Iyer", "designation_id": 999_999, "department_id": dept }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faculty_banners(pool: PgPool) {
    let (_, faculty) = seed_faculty(&pool).await;
    let uri = format!("/api/v1/faculty/{faculty}/banners");

    let banner = create(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "image": "/media/faculty/anita.jpg", "alt": "Anita Rao" }),
    )
    .await;
    let response = delete(common::build_test_app(pool.clone()), &format!("{uri}/{banner}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert!(json.as_array().unwrap().is_empty());
}
