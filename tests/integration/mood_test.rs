//! Integration tests for the mood journal.

use http::StatusCode;

use crate::helpers::{TestApp, unique};

async fn authed_user(app: &TestApp, prefix: &str) -> String {
    let name = unique(prefix);
    app.create_test_user(&name, "correct horse battery", true)
        .await;
    app.login(&format!("{}@test.local", name), "correct horse battery")
        .await
}

#[tokio::test]
async fn test_submit_mood_twice_same_day_upserts() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "mood-upsert").await;

    let response = app
        .request(
            "POST",
            "/api/moods",
            Some(serde_json::json!({ "mood_rating": 2, "reflection": "rough start" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/moods",
            Some(serde_json::json!({ "mood_rating": 5, "reflection": "turned around" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // One row per day, carrying the latest submission.
    let response = app.request("GET", "/api/moods", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let entries = response
        .body
        .pointer("/data")
        .and_then(|v| v.as_array())
        .expect("entries array");
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].get("mood_rating").and_then(|v| v.as_i64()),
        Some(5)
    );
    assert_eq!(
        entries[0].get("reflection").and_then(|v| v.as_str()),
        Some("turned around")
    );
}

#[tokio::test]
async fn test_today_mood_returns_entry() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "mood-today").await;

    let response = app
        .request("GET", "/api/moods/today", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.pointer("/data").map(|v| v.is_null()).unwrap_or(false));

    let response = app
        .request(
            "POST",
            "/api/moods",
            Some(serde_json::json!({ "mood_rating": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/moods/today", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .pointer("/data/mood_rating")
            .and_then(|v| v.as_i64()),
        Some(3)
    );
}

#[tokio::test]
async fn test_submit_mood_rejects_out_of_range_rating() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "mood-range").await;

    for rating in [0, 6] {
        let response = app
            .request(
                "POST",
                "/api/moods",
                Some(serde_json::json!({ "mood_rating": rating })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}
