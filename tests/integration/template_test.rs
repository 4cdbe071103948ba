//! Integration tests for the template catalog and goal suggestions.

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
async fn test_catalog_lists_three_templates() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "tpl-list").await;

    let response = app
        .request("GET", "/api/templates", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let templates = response
        .body
        .pointer("/data")
        .and_then(|v| v.as_array())
        .expect("templates array");
    assert_eq!(templates.len(), 3);

    let ids: Vec<&str> = templates
        .iter()
        .filter_map(|t| t.get("id").and_then(|v| v.as_str()))
        .collect();
    assert!(ids.contains(&"exam-preparation"));
    assert!(ids.contains(&"healthy-semester"));
    assert!(ids.contains(&"coding-practice"));
}

#[tokio::test]
async fn test_apply_exam_preparation_creates_four_habits() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "tpl-apply").await;

    let response = app
        .request(
            "POST",
            "/api/templates/exam-preparation/apply",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let created = response
        .body
        .pointer("/data")
        .and_then(|v| v.as_array())
        .expect("created habits array");
    assert_eq!(created.len(), 4);

    // The full set lands in the user's habit list.
    let response = app.request("GET", "/api/habits", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response
        .body
        .pointer("/data/items")
        .and_then(|v| v.as_array())
        .expect("items array");
    assert_eq!(items.len(), 4);
}

#[tokio::test]
async fn test_apply_unknown_template_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "tpl-unknown").await;

    let response = app
        .request(
            "POST",
            "/api/templates/no-such-template/apply",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_goal_returns_fixed_suggestions() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "tpl-analyze").await;

    let first = app
        .request(
            "POST",
            "/api/suggestions/analyze",
            Some(serde_json::json!({ "goal": "pass my algorithms exam" })),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(
        first.body.pointer("/data/provider").and_then(|v| v.as_str()),
        Some("static-catalog")
    );

    // The static provider ignores the goal text entirely.
    let second = app
        .request(
            "POST",
            "/api/suggestions/analyze",
            Some(serde_json::json!({ "goal": "run a marathon" })),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(
        first.body.pointer("/data/suggestions"),
        second.body.pointer("/data/suggestions")
    );
}
