//! Integration tests for node tree operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_get_node() {
    let app = TestApp::new().await;

    let node = app.create_file("/", "readme.md", "hello").await;
    assert_eq!(node["path"], "/readme.md");
    assert_eq!(node["kind"], "file");
    assert_eq!(node["content"], "hello");

    let by_path = app.get_node("/readme.md").await;
    assert_eq!(by_path.status, StatusCode::OK);
    assert_eq!(by_path.body["data"]["id"], node["id"]);

    let id = node["id"].as_str().unwrap();
    let by_id = app.request("GET", &format!("/api/fs/node/{}", id), None).await;
    assert_eq!(by_id.status, StatusCode::OK);
    assert_eq!(by_id.body["data"]["path"], "/readme.md");
}

#[tokio::test]
async fn test_get_missing_node() {
    let app = TestApp::new().await;

    let response = app.get_node("/nope.md").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.request("GET", "/api/fs/node/ffffffffffffffff", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_requires_existing_parent() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/fs/node",
            Some(json!({
                "kind": "file",
                "name": "a.md",
                "parent_path": "/missing",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "PARENT_NOT_FOUND");
}

#[tokio::test]
async fn test_create_rejects_duplicate_path() {
    let app = TestApp::new().await;
    app.create_file("/", "a.md", "one").await;

    let response = app
        .request(
            "POST",
            "/api/fs/node",
            Some(json!({
                "kind": "file",
                "name": "a.md",
                "parent_path": "/",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "PATH_CONFLICT");
}

#[tokio::test]
async fn test_create_rejects_bad_names() {
    let app = TestApp::new().await;

    for name in ["", "  ", "a/b"] {
        let response = app
            .request(
                "POST",
                "/api/fs/node",
                Some(json!({
                    "kind": "file",
                    "name": name,
                    "parent_path": "/",
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "name: {:?}", name);
    }
}

#[tokio::test]
async fn test_update_file_content() {
    let app = TestApp::new().await;
    let node = app.create_file("/", "a.md", "old").await;
    let id = node["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/fs/node/{}", id),
            Some(json!({ "content": "new" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["content"], "new");

    // Omitted fields stay untouched.
    let response = app
        .request(
            "PUT",
            &format!("/api/fs/node/{}", id),
            Some(json!({ "sort_order": 5 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["content"], "new");
    assert_eq!(response.body["data"]["sort_order"], 5);
}

#[tokio::test]
async fn test_move_rewrites_descendant_paths() {
    let app = TestApp::new().await;
    let a = app.create_folder("/", "a").await;
    app.create_folder("/a", "b").await;
    app.create_file("/a/b", "c.md", "deep").await;

    let id = a["id"].as_str().unwrap();
    let response = app
        .request(
            "POST",
            &format!("/api/fs/move/{}", id),
            Some(json!({ "new_name": "z" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["path"], "/z");

    let moved = app.get_node("/z/b/c.md").await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["data"]["content"], "deep");
    assert_eq!(moved.body["data"]["parent_path"], "/z/b");

    let old = app.get_node("/a/b/c.md").await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_file_into_folder_keeps_content() {
    let app = TestApp::new().await;
    app.create_folder("/", "archive").await;
    app.create_folder("/archive", "docs").await;
    let file = app.create_file("/", "readme.md", "hello").await;

    let id = file["id"].as_str().unwrap();
    let response = app
        .request(
            "POST",
            &format!("/api/fs/move/{}", id),
            Some(json!({ "new_parent_path": "/archive/docs" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["path"], "/archive/docs/readme.md");

    let moved = app.get_node("/archive/docs/readme.md").await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["data"]["content"], "hello");

    let old = app.get_node("/readme.md").await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_rejects_occupied_target() {
    let app = TestApp::new().await;
    app.create_file("/", "a.md", "one").await;
    let b = app.create_file("/", "b.md", "two").await;

    let id = b["id"].as_str().unwrap();
    let response = app
        .request(
            "POST",
            &format!("/api/fs/move/{}", id),
            Some(json!({ "new_name": "a.md" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "PATH_CONFLICT");

    // The original is untouched.
    let unchanged = app.get_node("/b.md").await;
    assert_eq!(unchanged.status, StatusCode::OK);
    assert_eq!(unchanged.body["data"]["content"], "two");
}

#[tokio::test]
async fn test_move_rejects_own_subtree() {
    let app = TestApp::new().await;
    let a = app.create_folder("/", "a").await;
    app.create_folder("/a", "b").await;

    let id = a["id"].as_str().unwrap();
    let response = app
        .request(
            "POST",
            &format!("/api/fs/move/{}", id),
            Some(json!({ "new_parent_path": "/a/b" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_cascade_spares_sibling_prefix() {
    let app = TestApp::new().await;
    app.create_folder("/", "a").await;
    app.create_folder("/", "ab").await;
    app.create_file("/ab", "keep.md", "safe").await;
    let a = app.get_node("/a").await.body["data"].clone();

    let id = a["id"].as_str().unwrap();
    let response = app
        .request(
            "POST",
            &format!("/api/fs/move/{}", id),
            Some(json!({ "new_name": "z" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // `/ab` shares the `/a` prefix as raw text but is not a descendant.
    let sibling = app.get_node("/ab/keep.md").await;
    assert_eq!(sibling.status, StatusCode::OK);
    assert_eq!(sibling.body["data"]["content"], "safe");
}

#[tokio::test]
async fn test_delete_folder_cascades() {
    let app = TestApp::new().await;
    let a = app.create_folder("/", "a").await;
    app.create_folder("/a", "b").await;
    app.create_file("/a/b", "c.md", "gone").await;
    app.create_folder("/", "ab").await;
    app.create_file("/ab", "keep.md", "safe").await;

    let id = a["id"].as_str().unwrap();
    let response = app
        .request("DELETE", &format!("/api/fs/node/{}", id), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(app.get_node("/a").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get_node("/a/b").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get_node("/a/b/c.md").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get_node("/ab/keep.md").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_tree_nests_children_folders_first() {
    let app = TestApp::new().await;
    app.create_folder("/", "docs").await;
    app.create_file("/", "aaa.md", "").await;
    app.create_file("/docs", "inner.md", "").await;

    let response = app.request("GET", "/api/fs/tree", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let roots = response.body["data"].as_array().unwrap();
    assert_eq!(roots.len(), 2);
    // Folders sort before files regardless of name.
    assert_eq!(roots[0]["name"], "docs");
    assert_eq!(roots[1]["name"], "aaa.md");

    let children = roots[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["path"], "/docs/inner.md");
}

#[tokio::test]
async fn test_tree_lists_children_of_parent() {
    let app = TestApp::new().await;
    app.create_folder("/", "docs").await;
    app.create_file("/docs", "one.md", "").await;
    app.create_file("/docs", "two.md", "").await;

    let response = app
        .request("GET", "/api/fs/tree?parent_path=/docs", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let children = response.body["data"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["name"], "one.md");
}

#[tokio::test]
async fn test_search_nodes() {
    let app = TestApp::new().await;
    app.create_file("/", "recipe.md", "tomato soup").await;
    app.create_file("/", "notes.md", "nothing here").await;
    app.create_folder("/", "tomato").await;

    let response = app.request("GET", "/api/fs/search?q=tomato", None).await;
    assert_eq!(response.status, StatusCode::OK);

    // Content match on the file; the folder is never searched.
    let hits = response.body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["path"], "/recipe.md");
}

#[tokio::test]
async fn test_search_rejects_empty_query() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/fs/search?q=", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/fs/search", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
