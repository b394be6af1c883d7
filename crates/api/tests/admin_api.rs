//! HTTP-level tests for `/admin`: model registry, program ordering, form
//! inboxes and media uploads.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create, get, get_auth, post_json, post_json_auth, post_multipart_auth,
    put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

const BOUNDARY: &str = "campus-test-boundary";

fn multipart_body(folder: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"folder\"\r\n\r\n{folder}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn department_with_programs(pool: &PgPool, names: &[&str]) -> (i64, Vec<i64>) {
    let dept = create(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({ "name": "Mechanical Engineering" }),
    )
    .await;
    let mut ids = Vec::new();
    for name in names {
        ids.push(
            create(
                common::build_test_app(pool.clone()),
                &format!("/api/v1/departments/{dept}/programs"),
                json!({ "name": name }),
            )
            .await,
        );
    }
    (dept, ids)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_model_registry_lists_department_inlines(pool: PgPool) {
    let token = common::editor_token(&pool).await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/models", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let departments = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["model"] == "departments")
        .expect("departments should be registered");
    assert!(departments["inlines"]
        .as_array()
        .unwrap()
        .contains(&json!("programs")));
}

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_programs(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let (dept, ids) = department_with_programs(&pool, &["B.Tech", "M.Tech", "PhD"]).await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/departments/{dept}/programs/order"),
        json!({ "ids": [ids[2], ids[0], ids[1]] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["PhD", "B.Tech", "M.Tech"]);
    assert_eq!(json["data"][0]["display_order"], 1);

    // The public listing follows the same order.
    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/departments/{dept}/programs"),
        )
        .await,
    )
    .await;
    assert_eq!(json[0]["name"], "PhD");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_with_partial_list_is_400(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let (dept, ids) = department_with_programs(&pool, &["B.Tech", "M.Tech"]).await;

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/admin/departments/{dept}/programs/order"),
        json!({ "ids": [ids[1]] }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_courses_excludes_linked_ones(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let (dept, _) = department_with_programs(&pool, &[]).await;
    let linked = create(
        common::build_test_app(pool.clone()),
        "/api/v1/courses",
        json!({ "name": "Thermal Engineering" }),
    )
    .await;
    create(
        common::build_test_app(pool.clone()),
        "/api/v1/courses",
        json!({ "name": "Robotics" }),
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/departments/{dept}/programs"),
        json!({ "name": "Thermal", "course_id": linked }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(
        get_auth(
            common::build_test_app(pool),
            &format!("/api/v1/admin/departments/{dept}/available-courses"),
            &token,
        )
        .await,
    )
    .await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].clone())
        .collect();
    assert_eq!(names, [json!("Robotics")]);
}

// ---------------------------------------------------------------------------
// Inboxes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_inbox_and_mail_flag(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/contact-forms",
        json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "9123456789",
            "message": "When do admissions open?",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let json = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/contact-forms?is_mail_sent=false",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/contact-forms/{id}/mail-sent"),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_mail_sent"], true);

    let json = body_json(
        get_auth(
            common::build_test_app(pool),
            "/api/v1/admin/contact-forms?is_mail_sent=false",
            &token,
        )
        .await,
    )
    .await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inboxes_are_not_public(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/admin/grievances").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grievance_status_must_be_known(pool: PgPool) {
    let token = common::editor_token(&pool).await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/grievances/1/status",
        json!({ "status": "escalated" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/grievances/999999/status",
        json!({ "status": "resolved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_stores_file_under_folder(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let config = common::test_config();
    let root = config.media.root.clone();
    let app = common::build_test_app_with(pool, config);

    let response = post_multipart_auth(
        app,
        "/api/v1/admin/media",
        BOUNDARY,
        multipart_body("departments/banners", "Hero Shot.PNG", b"\x89PNG fake"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.starts_with("departments/banners/hero-shot-"));
    assert!(path.ends_with(".png"));
    assert_eq!(json["data"]["url"], format!("/media/{path}"));
    assert_eq!(std::fs::read(root.join(path)).unwrap(), b"\x89PNG fake");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_rejects_executables_and_traversal(pool: PgPool) {
    let token = common::editor_token(&pool).await;

    let response = post_multipart_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/media",
        BOUNDARY,
        multipart_body("uploads", "payload.exe", b"MZ"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_multipart_auth(
        common::build_test_app(pool),
        "/api/v1/admin/media",
        BOUNDARY,
        multipart_body("../etc", "photo.jpg", b"jpeg"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
