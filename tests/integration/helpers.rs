//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use habitflow_api::AppState;
use habitflow_auth::PasswordHasher;
use habitflow_core::config::AppConfig;

/// Test application context.
///
/// Each test creates its own users with unique names, so tests can run
/// in parallel against a shared database without cleanup between them.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application, or `None` when the test database
    /// is unreachable.
    pub async fn spawn() -> Option<Self> {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = match habitflow_database::connection::create_pool(&config.database).await {
            Ok(pool) => pool,
            Err(e) => {
                eprintln!("skipping: test database unavailable ({})", e);
                return None;
            }
        };

        habitflow_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::build(config, db_pool.clone())
            .await
            .expect("Failed to build app state");

        let router = habitflow_api::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Create a test user directly in the database and return their ID.
    pub async fn create_test_user(&self, username: &str, password: &str, verified: bool) -> Uuid {
        let hasher = PasswordHasher::new();
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO users (id, email, password_hash, username, full_name, is_cse_student, email_verified)
               VALUES ($1, $2, $3, $4, $5, TRUE, $6)"#,
        )
        .bind(id)
        .bind(format!("{}@test.local", username))
        .bind(&hash)
        .bind(username)
        .bind(username)
        .bind(verified)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Login and return the JWT access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .pointer("/data/access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Generate a unique name so parallel tests never collide.
pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
