//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use notehub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application over a private in-memory database
    pub async fn new() -> Self {
        // A single connection keeps the in-memory database alive and shared.
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        notehub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = notehub_api::build_state(AppConfig::default(), db_pool.clone());
        let router = notehub_api::build_app(state);

        Self { router, db_pool }
    }

    /// Send a request to the test app and parse the JSON response
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
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

    /// Create a folder, returning its node
    pub async fn create_folder(&self, parent_path: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/fs/node",
                Some(json!({
                    "kind": "folder",
                    "name": name,
                    "parent_path": parent_path,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"].clone()
    }

    /// Create a file, returning its node
    pub async fn create_file(&self, parent_path: &str, name: &str, content: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/fs/node",
                Some(json!({
                    "kind": "file",
                    "name": name,
                    "parent_path": parent_path,
                    "content": content,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"].clone()
    }

    /// Fetch a node by path, returning the full response
    pub async fn get_node(&self, path: &str) -> TestResponse {
        self.request("GET", &format!("/api/fs/node?path={}", path), None)
            .await
    }
}

/// Response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
