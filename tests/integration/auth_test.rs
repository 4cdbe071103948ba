//! Integration tests for authentication flow.

use http::StatusCode;

use crate::helpers::{TestApp, unique};

#[tokio::test]
async fn test_login_success() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("login-ok");
    app.create_test_user(&name, "correct horse battery", true)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": format!("{}@test.local", name),
                "password": "correct horse battery",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.pointer("/data/access_token").is_some());
    assert!(response.body.pointer("/data/refresh_token").is_some());
    assert_eq!(
        response
            .body
            .pointer("/data/user/username")
            .and_then(|v| v.as_str()),
        Some(name.as_str())
    );
}

#[tokio::test]
async fn test_login_wrong_password_is_generic() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("login-wrong");
    app.create_test_user(&name, "correct horse battery", true)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": format!("{}@test.local", name),
                "password": "not the password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("message").and_then(|v| v.as_str()),
        Some("Invalid login credentials")
    );
}

#[tokio::test]
async fn test_login_unknown_email_same_message() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": format!("{}@test.local", unique("nobody")),
                "password": "whatever password",
            })),
            None,
        )
        .await;

    // Unknown accounts and bad passwords must be indistinguishable.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("message").and_then(|v| v.as_str()),
        Some("Invalid login credentials")
    );
}

#[tokio::test]
async fn test_login_unverified_email_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("unverified");
    app.create_test_user(&name, "correct horse battery", false)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": format!("{}@test.local", name),
                "password": "correct horse battery",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("message").and_then(|v| v.as_str()),
        Some("Email not confirmed")
    );
}

#[tokio::test]
async fn test_register_weak_password_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("weakpass");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": format!("{}@test.local", name),
                "password": "password",
                "username": name,
                "full_name": "Weak Password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_invalid_year_of_study_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("badyear");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": format!("{}@test.local", name),
                "password": "correct horse battery",
                "username": name,
                "full_name": "Bad Year",
                "is_cse_student": true,
                "year_of_study": 5,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_then_verify_then_login() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("register");
    let email = format!("{}@test.local", name);

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": email,
                "password": "correct horse battery",
                "username": name,
                "full_name": "New Student",
                "is_cse_student": true,
                "year_of_study": 2,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // The token is not exposed over the API; fetch it directly.
    let token: String =
        sqlx::query_scalar("SELECT verification_token FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&app.db_pool)
            .await
            .expect("user row missing");

    let response = app
        .request(
            "POST",
            "/api/auth/verify-email",
            Some(serde_json::json!({ "token": token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = app.login(&email, "correct horse battery").await;
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .pointer("/data/email_verified")
            .and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[tokio::test]
async fn test_me_requires_token() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotation_detects_reuse() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("refresh");
    app.create_test_user(&name, "correct horse battery", true)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": format!("{}@test.local", name),
                "password": "correct horse battery",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let old_refresh = response
        .body
        .pointer("/data/refresh_token")
        .and_then(|v| v.as_str())
        .expect("refresh token")
        .to_string();

    // First refresh succeeds and rotates the token.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": old_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let new_access = response
        .body
        .pointer("/data/access_token")
        .and_then(|v| v.as_str())
        .expect("access token")
        .to_string();

    // Replaying the old refresh token revokes the session.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": old_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The revoked session no longer authenticates.
    let response = app
        .request("GET", "/api/auth/me", None, Some(&new_access))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let name = unique("logout");
    app.create_test_user(&name, "correct horse battery", true)
        .await;
    let token = app
        .login(&format!("{}@test.local", name), "correct horse battery")
        .await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
