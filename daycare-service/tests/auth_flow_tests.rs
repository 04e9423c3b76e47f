mod common;

use auth::Claims;
use auth::TokenCodec;
use axum::http::StatusCode;
use chrono::Utc;
use common::TestApp;
use common::ADMIN_PASSWORD;
use common::ADMIN_USERNAME;
use common::JWT_SECRET;
use common::STAFF_PASSWORD;
use common::STAFF_USERNAME;
use serde_json::json;

#[tokio::test]
async fn test_login_returns_token_for_valid_credentials() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": STAFF_USERNAME, "password": STAFF_PASSWORD }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().expect("missing token");
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;

    let (wrong_password_status, wrong_password_body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": STAFF_USERNAME, "password": "not_the_password" }),
        )
        .await;
    let (unknown_user_status, unknown_user_body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "nobody_here", "password": STAFF_PASSWORD }),
        )
        .await;

    assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user_status, StatusCode::UNAUTHORIZED);
    // Same status, same body; the response must not leak which half of
    // the pair was wrong.
    assert_eq!(wrong_password_body, unknown_user_body);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    // Plain-text body; the harness passes it through as a string.
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn test_protected_route_rejects_missing_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/teachers", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["data"]["message"].is_string());
}

#[tokio::test]
async fn test_protected_route_accepts_valid_token() {
    let app = TestApp::new().await;
    let token = app.staff_token().await;

    let (status, body) = app.get("/api/teachers", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_array());
}

#[tokio::test]
async fn test_forged_token_looks_like_missing_token() {
    let app = TestApp::new().await;

    let foreign_codec = TokenCodec::new(b"attacker-controlled-secret-of-sufficient-length");
    let claims = Claims::issue(STAFF_USERNAME, vec![], chrono::Duration::hours(1))
        .expect("Failed to build claims");
    let forged = foreign_codec.encode(&claims).expect("Failed to encode");

    let (forged_status, _) = app.get("/api/teachers", Some(&forged)).await;
    let (missing_status, _) = app.get("/api/teachers", None).await;

    assert_eq!(forged_status, StatusCode::UNAUTHORIZED);
    assert_eq!(forged_status, missing_status);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;

    let now = Utc::now().timestamp();
    let claims = Claims::from_parts(STAFF_USERNAME, vec![], now - 7200, now - 3600)
        .expect("Failed to build claims");
    let expired = TokenCodec::new(JWT_SECRET)
        .encode(&claims)
        .expect("Failed to encode");

    let (status, _) = app.get("/api/teachers", Some(&expired)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/teachers", Some("not-a-token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_deleted_account_is_rejected() {
    let app = TestApp::new().await;
    let token = app.staff_token().await;

    // The token is still validly signed and unexpired, but the account
    // behind it is gone.
    app.credentials.remove(STAFF_USERNAME);

    let (status, _) = app.get("/api/teachers", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_reflects_the_presented_token() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;
    let staff_token = app.staff_token().await;

    let (admin_status, admin_body) = app.get("/api/auth/me", Some(&admin_token)).await;
    let (staff_status, staff_body) = app.get("/api/auth/me", Some(&staff_token)).await;

    assert_eq!(admin_status, StatusCode::OK);
    assert_eq!(admin_body["data"]["username"], ADMIN_USERNAME);
    assert!(admin_body["data"]["roles"]
        .as_array()
        .unwrap()
        .contains(&json!("admin")));

    assert_eq!(staff_status, StatusCode::OK);
    assert_eq!(staff_body["data"]["username"], STAFF_USERNAME);
    assert!(!staff_body["data"]["roles"]
        .as_array()
        .unwrap()
        .contains(&json!("admin")));
}

#[tokio::test]
async fn test_concurrent_requests_resolve_distinct_identities() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;
    let staff_token = app.staff_token().await;

    let (create_status, _) = app
        .post(
            "/api/accounts",
            Some(&admin_token),
            json!({ "username": "night_shift", "password": "pass_word!", "roles": ["staff"] }),
        )
        .await;
    assert_eq!(create_status, StatusCode::CREATED);
    let third_token = app.login("night_shift", "pass_word!").await;

    // In-flight requests carrying different tokens must each resolve to
    // their own identity, never to another request's.
    for _ in 0..3 {
        let (admin, staff, third) = tokio::join!(
            app.get("/api/auth/me", Some(&admin_token)),
            app.get("/api/auth/me", Some(&staff_token)),
            app.get("/api/auth/me", Some(&third_token)),
        );

        assert_eq!(admin.0, StatusCode::OK);
        assert_eq!(staff.0, StatusCode::OK);
        assert_eq!(third.0, StatusCode::OK);
        assert_eq!(admin.1["data"]["username"], ADMIN_USERNAME);
        assert_eq!(staff.1["data"]["username"], STAFF_USERNAME);
        assert_eq!(third.1["data"]["username"], "night_shift");
    }
}

#[tokio::test]
async fn test_create_account_requires_admin_role() {
    let app = TestApp::new().await;
    let staff_token = app.staff_token().await;

    let (status, _) = app
        .post(
            "/api/accounts",
            Some(&staff_token),
            json!({ "username": "new_hire", "password": "pass_word!", "roles": ["staff"] }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_account_requires_authentication() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/accounts",
            None,
            json!({ "username": "new_hire", "password": "pass_word!", "roles": ["staff"] }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_creates_account_and_new_account_can_log_in() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/api/accounts",
            Some(&admin_token),
            json!({ "username": "new_hire", "password": "pass_word!", "roles": ["staff"] }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["username"], "new_hire");
    assert_eq!(body["data"]["roles"], json!(["staff"]));

    let token = app.login("new_hire", "pass_word!").await;
    let (me_status, me_body) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(me_status, StatusCode::OK);
    assert_eq!(me_body["data"]["username"], "new_hire");
}

#[tokio::test]
async fn test_create_account_duplicate_username() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/api/accounts",
            Some(&admin_token),
            json!({ "username": ADMIN_USERNAME, "password": "pass_word!", "roles": ["staff"] }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_create_account_invalid_username() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;

    let (status, _) = app
        .post(
            "/api/accounts",
            Some(&admin_token),
            json!({ "username": "x", "password": "pass_word!", "roles": ["staff"] }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_multiple_tokens_for_one_account_are_all_valid() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;

    // Two tokens for the same account issued at different moments are
    // both valid until they expire.
    let second_admin_token = app.login(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let (first_status, _) = app.get("/api/auth/me", Some(&admin_token)).await;
    let (second_status, _) = app.get("/api/auth/me", Some(&second_admin_token)).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
}
