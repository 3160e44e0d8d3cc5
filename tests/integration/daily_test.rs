//! Integration tests for daily note operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_get_creates_daily_note_and_folder() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/daily/2024-01-02", None).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["data"]["date"], "2024-01-02");
    assert_eq!(response.body["data"]["path"], "/daily/2024-01-02.md");
    assert_eq!(response.body["data"]["content"], "# January 2, 2024\n\n");

    // The /daily folder was created on demand.
    let folder = app.get_node("/daily").await;
    assert_eq!(folder.status, StatusCode::OK);
    assert_eq!(folder.body["data"]["kind"], "folder");

    // A second read finds the existing note.
    let response = app.request("GET", "/api/daily/2024-01-02", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_put_upserts_daily_note() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/daily/2024-05-10",
            Some(json!({ "content": "first draft" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["content"], "first draft");

    let response = app
        .request(
            "PUT",
            "/api/daily/2024-05-10",
            Some(json!({ "content": "second draft" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["content"], "second draft");

    // The daily note is a regular file node in the tree.
    let node = app.get_node("/daily/2024-05-10.md").await;
    assert_eq!(node.status, StatusCode::OK);
    assert_eq!(node.body["data"]["content"], "second draft");
    assert_eq!(node.body["data"]["is_daily"], true);
}

#[tokio::test]
async fn test_delete_daily_note() {
    let app = TestApp::new().await;
    app.request("GET", "/api/daily/2024-01-02", None).await;

    let response = app.request("DELETE", "/api/daily/2024-01-02", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("DELETE", "/api/daily/2024-01-02", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    assert_eq!(
        app.get_node("/daily/2024-01-02.md").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_unpadded_date_maps_to_padded_note() {
    let app = TestApp::new().await;
    app.request("GET", "/api/daily/2024-01-02", None).await;

    // `2024-1-2` is the same day as `2024-01-02` and must not create a
    // second note.
    let response = app.request("GET", "/api/daily/2024-1-2", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["date"], "2024-01-02");
    assert_eq!(response.body["data"]["path"], "/daily/2024-01-02.md");

    assert_eq!(
        app.get_node("/daily/2024-1-2.md").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_rejects_invalid_dates() {
    let app = TestApp::new().await;

    for date in ["2024-13-01", "not-a-date", "2024-02-30"] {
        let response = app.request("GET", &format!("/api/daily/{}", date), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "date: {}", date);
    }
}

#[tokio::test]
async fn test_list_groups_by_year_descending() {
    let app = TestApp::new().await;
    app.request("GET", "/api/daily/2023-06-01", None).await;
    app.request("GET", "/api/daily/2024-01-15", None).await;
    app.request("GET", "/api/daily/2024-03-02", None).await;

    let response = app.request("GET", "/api/daily", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let years = response.body["data"]["years"].as_array().unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0]["year"], "2024");
    assert_eq!(years[1]["year"], "2023");

    let notes_2024 = years[0]["notes"].as_array().unwrap();
    assert_eq!(notes_2024.len(), 2);
    // Newest first within a year.
    assert_eq!(notes_2024[0]["date"], "2024-03-02");
    assert_eq!(notes_2024[1]["date"], "2024-01-15");
}

#[tokio::test]
async fn test_daily_config_counts_notes() {
    let app = TestApp::new().await;
    app.request("GET", "/api/daily/2024-01-01", None).await;
    app.request("GET", "/api/daily/2024-01-02", None).await;

    let response = app.request("GET", "/api/daily/config", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["storage"], "sqlite");
    assert_eq!(response.body["data"]["count"], 2);
}
