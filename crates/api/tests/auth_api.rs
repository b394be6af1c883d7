//! HTTP-level tests for login, token refresh, logout, lockout and role
//! enforcement on the admin endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user, get, get_auth, post_auth, post_json, post_json_auth, TEST_PASSWORD,
};
use sqlx::PgPool;

async fn login(app: axum::Router, username: &str, password: &str) -> axum::response::Response {
    post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_user(&pool, "registrar", "admin").await;
    let app = common::build_test_app(pool);

    let response = login(app, "registrar", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["role"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_and_unknown_user_are_401(pool: PgPool) {
    create_user(&pool, "registrar", "admin").await;

    let response = login(common::build_test_app(pool.clone()), "registrar", "nope-nope").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = login(common::build_test_app(pool), "ghost", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_credentials_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = login(app, "   ", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_locks_after_five_failures(pool: PgPool) {
    create_user(&pool, "locksmith", "editor").await;

    for _ in 0..5 {
        let response = login(common::build_test_app(pool.clone()), "locksmith", "wrong-pass").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while locked.
    let response = login(common::build_test_app(pool), "locksmith", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_the_session(pool: PgPool) {
    create_user(&pool, "rotator", "editor").await;
    let json = body_json(login(common::build_test_app(pool.clone()), "rotator", TEST_PASSWORD).await).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"], json["refresh_token"]);

    // The old token was revoked by the rotation.
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_refresh_tokens(pool: PgPool) {
    create_user(&pool, "leaver", "editor").await;
    let json = body_json(login(common::build_test_app(pool.clone()), "leaver", TEST_PASSWORD).await).await;
    let access = json["access_token"].as_str().unwrap();
    let refresh = json["refresh_token"].as_str().unwrap();

    let response = post_auth(common::build_test_app(pool.clone()), "/api/v1/auth/logout", access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_endpoints_require_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/admin/models").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/models", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_editor_cannot_manage_users(pool: PgPool) {
    let token = common::editor_token(&pool).await;

    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Editors still reach the content registry.
    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/models", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_creates_editor_who_can_log_in(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/users",
        serde_json::json!({
            "username": "newsdesk",
            "email": "newsdesk@college.test",
            "password": "long-enough-password",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "editor");
    assert!(json["data"].get("password_hash").is_none());

    let response = login(common::build_test_app(pool), "newsdesk", "long-enough-password").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_short_password_is_rejected(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/users",
        serde_json::json!({
            "username": "weak",
            "email": "weak@college.test",
            "password": "short",
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
