//! HTTP-level tests for news, committees, achievements, careers,
//! placements and the public form submissions.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn department(pool: &PgPool) -> i64 {
    create(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({ "name": "Civil Engineering" }),
    )
    .await
}

// ---------------------------------------------------------------------------
// News and events
// ---------------------------------------------------------------------------

async fn tag(pool: &PgPool, name: &str) -> i64 {
    create(
        common::build_test_app(pool.clone()),
        "/api/v1/news-tags",
        json!({ "tag_name": name }),
    )
    .await
}

fn news_body(dept: i64, tag_ids: &[i64]) -> serde_json::Value {
    json!({
        "heading": "Annual Tech Fest",
        "date": "2026-02-14",
        "category": "events",
        "department_id": dept,
        "content": "<p>Three days of workshops and talks.</p>",
        "tag_ids": tag_ids,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_create_attaches_tags_and_fills_seo(pool: PgPool) {
    let dept = department(&pool).await;
    let fest = tag(&pool, "fest").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/news-events",
        news_body(dept, &[fest]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["tags"][0]["tag_name"], "fest");
    assert_eq!(created["seo"]["meta_title"], "Annual Tech Fest | Test College");

    let id = created["id"].as_i64().unwrap();
    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/news-events/{id}")).await,
    )
    .await;
    assert_eq!(json["department"]["id"], dept);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_tag_list_is_replaced_on_update(pool: PgPool) {
    let dept = department(&pool).await;
    let fest = tag(&pool, "fest").await;
    let sports = tag(&pool, "sports").await;
    let id = create(
        common::build_test_app(pool.clone()),
        "/api/v1/news-events",
        news_body(dept, &[fest]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/news-events/{id}"),
        json!({ "tag_ids": [sports] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tags = json["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["tag_name"], "sports");

    // Omitting the list leaves the association alone.
    let json = body_json(
        put_json(
            common::build_test_app(pool),
            &format!("/api/v1/news-events/{id}"),
            json!({ "heading": "Tech Fest 2026" }),
        )
        .await,
    )
    .await;
    assert_eq!(json["tags"][0]["tag_name"], "sports");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_with_unknown_tag_is_404(pool: PgPool) {
    let dept = department(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/news-events",
        news_body(dept, &[424_242]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news_events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_rejects_unknown_category(pool: PgPool) {
    let dept = department(&pool).await;
    let mut body = news_body(dept, &[]);
    body["category"] = json!("gossip");

    let response = post_json(common::build_test_app(pool), "/api/v1/news-events", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_tag_name_is_409(pool: PgPool) {
    tag(&pool, "alumni").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/news-tags",
        json!({ "tag_name": "alumni" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Committees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_committee_members_filter_by_category(pool: PgPool) {
    let anti_ragging = create(
        common::build_test_app(pool.clone()),
        "/api/v1/committee-categories",
        json!({ "name": "Anti-Ragging" }),
    )
    .await;
    let library = create(
        common::build_test_app(pool.clone()),
        "/api/v1/committee-categories",
        json!({ "name": "Library" }),
    )
    .await;
    for (category, member) in [(anti_ragging, "R. Menon"), (library, "S. Das")] {
        create(
            common::build_test_app(pool.clone()),
            "/api/v1/committee-members",
            json!({
                "category_id": category,
                "name_of_member": member,
                "designation": "Associate Professor",
                "position": "Member",
            }),
        )
        .await;
    }

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/committee-members?category_id={library}"),
        )
        .await,
    )
    .await;
    let members = json.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name_of_member"], "S. Das");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_requires_existing_category(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/committee-members",
        json!({
            "category_id": 31337,
            "name_of_member": "Nobody",
            "designation": "None",
            "position": "None",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_college_achievement_requires_description(pool: PgPool) {
    let dept = department(&pool).await;
    let body = json!({
        "image": "/media/achievements/naac.jpg",
        "alt": "NAAC certificate",
        "department_id": dept,
        "date": "2025-11-01",
    });

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/college-achievements",
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Student achievements have no such rule.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/student-achievements",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    // The two kinds never see each other's rows.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/college-achievements/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Careers and placements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_company_keeps_success_stories(pool: PgPool) {
    let dept = department(&pool).await;
    let company = create(
        common::build_test_app(pool.clone()),
        "/api/v1/companies",
        json!({ "name": "Acme Infra", "website": "https://acme.example.com" }),
    )
    .await;
    let success = create(
        common::build_test_app(pool.clone()),
        "/api/v1/career-successes",
        json!({
            "student_name": "Priya N",
            "alt": "Priya N",
            "description": "Placed as site engineer.",
            "company_id": company,
            "department_id": dept,
            "batch": "2021-2025",
        }),
    )
    .await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/companies/{company}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/career-successes/{success}"),
        )
        .await,
    )
    .await;
    assert!(json["company_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_website_must_be_a_url(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/companies",
        json!({ "name": "Acme", "website": "not a url" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_placement_stat_carries_display_value(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/placement-stats",
        json!({
            "placement_name": "Placement rate",
            "placement_number": "92",
            "suffix": "%",
            "text": "of the 2025 batch",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["display_value"], "92%");
    assert_eq!(json["placement_name"], "Placement rate");
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_rejects_bad_email(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/contact-forms",
        json!({ "name": "Asha", "email": "asha-at-home", "phone": "9000000000", "message": "Hi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grievance_reference_lookup(pool: PgPool) {
    let dept = department(&pool).await;
    let category = create(
        common::build_test_app(pool.clone()),
        "/api/v1/committee-categories",
        json!({ "name": "Grievance Redressal" }),
    )
    .await;
    let designation = create(
        common::build_test_app(pool.clone()),
        "/api/v1/designations",
        json!({ "name": "Lecturer" }),
    )
    .await;
    let faculty = create(
        common::build_test_app(pool.clone()),
        "/api/v1/faculty",
        json!({ "name": "V. Kumar", "designation_id": designation, "department_id": dept }),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/grievances",
        json!({
            "name": "Student A",
            "phone": "9000000001",
            "email": "student.a@college.test",
            "department_id": dept,
            "committee_category_id": category,
            "faculty_id": faculty,
            "details": "Lab equipment has been broken for weeks.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["status"], "pending");
    let reference = created["reference_number"].as_str().unwrap().to_string();

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/grievances/by-reference/{reference}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["status"], "pending");
    assert!(json.get("details").is_none(), "lookup exposes status only");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/grievances/by-reference/00000000-0000-4000-8000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
