//! Integration tests for challenges and participation.

use chrono::{Duration, Utc};
use http::StatusCode;

use crate::helpers::{TestApp, unique};

async fn authed_user(app: &TestApp, prefix: &str) -> String {
    let name = unique(prefix);
    app.create_test_user(&name, "correct horse battery", true)
        .await;
    app.login(&format!("{}@test.local", name), "correct horse battery")
        .await
}

async fn create_challenge(app: &TestApp, token: &str, max_participants: Option<i32>) -> String {
    let response = app
        .request(
            "POST",
            "/api/challenges",
            Some(serde_json::json!({
                "title": unique("challenge"),
                "description": "30 days of consistent study",
                "start_date": Utc::now(),
                "end_date": Utc::now() + Duration::days(30),
                "max_participants": max_participants,
            })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "create challenge failed: {:?}",
        response.body
    );
    response
        .body
        .pointer("/data/id")
        .and_then(|v| v.as_str())
        .expect("challenge id")
        .to_string()
}

#[tokio::test]
async fn test_create_challenge_rejects_inverted_dates() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = authed_user(&app, "chal-dates").await;

    let response = app
        .request(
            "POST",
            "/api/challenges",
            Some(serde_json::json!({
                "title": "Backwards",
                "description": "ends before it starts",
                "start_date": Utc::now(),
                "end_date": Utc::now() - Duration::days(1),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_join_challenge_then_duplicate_conflicts() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let creator = authed_user(&app, "chal-creator").await;
    let joiner = authed_user(&app, "chal-joiner").await;
    let challenge_id = create_challenge(&app, &creator, None).await;

    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&joiner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&joiner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body.get("message").and_then(|v| v.as_str()),
        Some("Already joined this challenge")
    );
}

#[tokio::test]
async fn test_rejoining_full_challenge_reports_already_joined() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let creator = authed_user(&app, "chal-rejoin-c").await;
    let joiner = authed_user(&app, "chal-rejoin").await;
    let challenge_id = create_challenge(&app, &creator, Some(1)).await;

    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&joiner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // The joiner filled the challenge themselves. Rejoining must report
    // the duplicate, not the capacity.
    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&joiner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body.get("message").and_then(|v| v.as_str()),
        Some("Already joined this challenge")
    );
}

#[tokio::test]
async fn test_join_full_challenge_conflicts() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let creator = authed_user(&app, "chal-full-c").await;
    let first = authed_user(&app, "chal-full-1").await;
    let second = authed_user(&app, "chal-full-2").await;
    let challenge_id = create_challenge(&app, &creator, Some(1)).await;

    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&first),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&second),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_leave_removes_only_own_participation() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let creator = authed_user(&app, "chal-leave-c").await;
    let staying = authed_user(&app, "chal-stay").await;
    let leaving = authed_user(&app, "chal-leave").await;
    let challenge_id = create_challenge(&app, &creator, None).await;

    for token in [&staying, &leaving] {
        let response = app
            .request(
                "POST",
                &format!("/api/challenges/{}/join", challenge_id),
                None,
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request(
            "DELETE",
            &format!("/api/challenges/{}/leave", challenge_id),
            None,
            Some(&leaving),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/challenges/{}/participants", challenge_id),
            None,
            Some(&creator),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let participants = response
        .body
        .pointer("/data")
        .and_then(|v| v.as_array())
        .expect("participants array");
    assert_eq!(participants.len(), 1);
}

#[tokio::test]
async fn test_leave_without_joining_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let creator = authed_user(&app, "chal-nf-c").await;
    let outsider = authed_user(&app, "chal-nf-o").await;
    let challenge_id = create_challenge(&app, &creator, None).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/challenges/{}/leave", challenge_id),
            None,
            Some(&outsider),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_joined_challenges_listed() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let creator = authed_user(&app, "chal-joined-c").await;
    let joiner = authed_user(&app, "chal-joined-j").await;
    let challenge_id = create_challenge(&app, &creator, None).await;

    let response = app
        .request(
            "POST",
            &format!("/api/challenges/{}/join", challenge_id),
            None,
            Some(&joiner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request("GET", "/api/challenges/joined", None, Some(&joiner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let joined = response
        .body
        .pointer("/data")
        .and_then(|v| v.as_array())
        .expect("joined array");
    assert_eq!(joined.len(), 1);
    assert_eq!(
        joined[0].get("id").and_then(|v| v.as_str()),
        Some(challenge_id.as_str())
    );
}
