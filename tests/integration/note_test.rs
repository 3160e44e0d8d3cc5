//! Integration tests for flat note operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_note(app: &TestApp, title: &str, content: &str, date: &str) -> serde_json::Value {
    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({
                "title": title,
                "content": content,
                "date": date,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["data"].clone()
}

#[tokio::test]
async fn test_note_crud() {
    let app = TestApp::new().await;

    let note = create_note(&app, "Groceries", "milk, eggs", "2024-03-01").await;
    let id = note["id"].as_str().unwrap();
    assert_eq!(note["title"], "Groceries");

    let response = app.request("GET", &format!("/api/notes/{}", id), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["content"], "milk, eggs");

    // Updates replace every field.
    let response = app
        .request(
            "PUT",
            &format!("/api/notes/{}", id),
            Some(json!({
                "title": "Groceries",
                "content": "milk, eggs, bread",
                "date": "2024-03-01",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["content"], "milk, eggs, bread");
    assert_eq!(response.body["data"]["title"], "Groceries");

    let response = app
        .request("DELETE", &format!("/api/notes/{}", id), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/notes/{}", id), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_note_defaults_date_to_today() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({ "title": "No date", "content": "" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(response.body["data"]["date"], today);
}

#[tokio::test]
async fn test_notes_list_newest_first() {
    let app = TestApp::new().await;
    create_note(&app, "Old", "", "2023-01-01").await;
    create_note(&app, "New", "", "2024-06-15").await;

    let response = app.request("GET", "/api/notes", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["title"], "New");
    assert_eq!(notes[1]["title"], "Old");
}

#[tokio::test]
async fn test_notes_by_date_prefix() {
    let app = TestApp::new().await;
    create_note(&app, "March", "", "2024-03-10").await;
    create_note(&app, "April", "", "2024-04-02").await;

    let response = app.request("GET", "/api/notes/date/2024-03", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "March");
}

#[tokio::test]
async fn test_note_search() {
    let app = TestApp::new().await;
    create_note(&app, "Soup recipe", "tomato, basil", "2024-01-01").await;
    create_note(&app, "Todo", "call the plumber", "2024-01-02").await;

    let response = app.request("GET", "/api/search?q=tomato", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Soup recipe");

    let response = app.request("GET", "/api/search?q=", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_note_search_treats_wildcards_literally() {
    let app = TestApp::new().await;
    create_note(&app, "Progress", "100% done", "2024-01-01").await;
    create_note(&app, "Estimate", "about 100 percent", "2024-01-02").await;
    create_note(&app, "Snake case", "my_var naming", "2024-01-03").await;
    create_note(&app, "Spaced", "my var naming", "2024-01-04").await;

    // `%` and `_` in the query must match themselves, not act as LIKE
    // wildcards (which would match every note).
    let response = app.request("GET", "/api/search?q=100%25", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Progress");

    let response = app.request("GET", "/api/search?q=my_var", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Snake case");
}

#[tokio::test]
async fn test_note_update_missing() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/notes/ffffffffffffffff",
            Some(json!({ "content": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
