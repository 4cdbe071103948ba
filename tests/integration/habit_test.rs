//! Integration tests for habit CRUD and completions.

use http::StatusCode;

use crate::helpers::{TestApp, unique};

async fn authed_user(app: &TestApp, prefix: &str) -> String {
    let name = unique(prefix);
    app.create_test_user(&name, "correct horse battery", true)
        .await;
    app.login(&format!("{}@test.local", name), "correct horse battery")
        .await
}

async fn create_habit(app: &TestApp, token: &str, title: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/habits",
            Some(serde_json::json!({
                "title": title,
                "category": "study",
                "frequency": "daily",
                "target_count": 1,
                "difficulty": "medium",
            })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "create habit failed: {:?}",
        response.body
    );
    response
        .body
        .pointer("/data/id")
        .and_then(|v| v.as_str())
        .expect("habit id")
        .to_string()
}

#[tokio::test]
async fn test_create_habit_appears_in_list() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-list").await;

    create_habit(&app, &token, "Morning Pages").await;

    let response = app.request("GET", "/api/habits", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let items = response
        .body
        .pointer("/data/items")
        .and_then(|v| v.as_array())
        .expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("title").and_then(|v| v.as_str()),
        Some("Morning Pages")
    );
}

#[tokio::test]
async fn test_create_habit_rejects_zero_target() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-zero").await;

    let response = app
        .request(
            "POST",
            "/api/habits",
            Some(serde_json::json!({
                "title": "Broken",
                "category": "study",
                "frequency": "daily",
                "target_count": 0,
                "difficulty": "easy",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_habit_partial() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-update").await;
    let habit_id = create_habit(&app, &token, "Old Title").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/habits/{}", habit_id),
            Some(serde_json::json!({ "title": "New Title" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/title").and_then(|v| v.as_str()),
        Some("New Title")
    );
    // Untouched fields keep their values.
    assert_eq!(
        response
            .body
            .pointer("/data/category")
            .and_then(|v| v.as_str()),
        Some("study")
    );
}

#[tokio::test]
async fn test_habits_are_owner_scoped() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = authed_user(&app, "habit-owner").await;
    let stranger = authed_user(&app, "habit-stranger").await;
    let habit_id = create_habit(&app, &owner, "Private Habit").await;

    // Another user cannot read, update, or delete it.
    let response = app
        .request(
            "GET",
            &format!("/api/habits/{}", habit_id),
            None,
            Some(&stranger),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "DELETE",
            &format!("/api/habits/{}", habit_id),
            None,
            Some(&stranger),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The owner still sees it.
    let response = app
        .request(
            "GET",
            &format!("/api/habits/{}", habit_id),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_complete_habit_once_per_day() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-complete").await;
    let habit_id = create_habit(&app, &token, "Daily Review").await;

    let response = app
        .request(
            "POST",
            &format!("/api/habits/{}/complete", habit_id),
            Some(serde_json::json!({ "mood_rating": 4, "notes": "went well" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // A second completion the same day hits the target cap.
    let response = app
        .request(
            "POST",
            &format!("/api/habits/{}/complete", habit_id),
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_complete_habit_rejects_bad_mood_rating() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-mood").await;
    let habit_id = create_habit(&app, &token, "Stretch").await;

    let response = app
        .request(
            "POST",
            &format!("/api/habits/{}/complete", habit_id),
            Some(serde_json::json!({ "mood_rating": 6 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_archived_habit_cannot_be_completed() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-archived").await;
    let habit_id = create_habit(&app, &token, "Retired Habit").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/habits/{}", habit_id),
            Some(serde_json::json!({ "is_active": false })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            &format!("/api/habits/{}/complete", habit_id),
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_completions_listed_for_habit() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-history").await;
    let habit_id = create_habit(&app, &token, "History Habit").await;

    let response = app
        .request(
            "POST",
            &format!("/api/habits/{}/complete", habit_id),
            Some(serde_json::json!({ "notes": "first" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            "GET",
            &format!("/api/habits/{}/completions", habit_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response
        .body
        .pointer("/data/items")
        .and_then(|v| v.as_array())
        .expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].get("notes").and_then(|v| v.as_str()), Some("first"));
}

#[tokio::test]
async fn test_dashboard_reflects_completion() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "dashboard").await;
    let habit_id = create_habit(&app, &token, "Dashboard Habit").await;

    let response = app
        .request(
            "POST",
            &format!("/api/habits/{}/complete", habit_id),
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request("GET", "/api/analytics/dashboard", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .pointer("/data/active_habits")
            .and_then(|v| v.as_u64()),
        Some(1)
    );
    assert_eq!(
        response
            .body
            .pointer("/data/completed_today")
            .and_then(|v| v.as_u64()),
        Some(1)
    );

    let response = app
        .request(
            "GET",
            &format!("/api/analytics/habits/{}/streak", habit_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .pointer("/data/current")
            .and_then(|v| v.as_u64()),
        Some(1)
    );
}

#[tokio::test]
async fn test_recent_completions_spans_habits() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "habit-recent").await;

    let first = create_habit(&app, &token, "Stretch").await;
    let second = create_habit(&app, &token, "Read a chapter").await;
    for id in [&first, &second] {
        let response = app
            .request(
                "POST",
                &format!("/api/habits/{}/complete", id),
                Some(serde_json::json!({})),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", "/api/completions?days=7", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response
        .body
        .pointer("/data")
        .and_then(|v| v.as_array())
        .expect("completions array");
    assert_eq!(items.len(), 2);
}
