//! Request DTOs and query parameters.
//!
//! Node and note payloads deserialize straight into the entity request
//! types; only query strings and daily-note bodies need their own shapes.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/fs/tree`.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeQuery {
    /// When set, list only the direct children of this folder.
    pub parent_path: Option<String>,
}

/// Query parameters for `GET /api/fs/node`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodePathQuery {
    /// Full path of the node to look up.
    pub path: String,
}

/// Query parameters for search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Substring to match.
    #[serde(default)]
    pub q: String,
}

/// Body of `PUT /api/daily/{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertDailyRequest {
    /// Full note content to store.
    #[serde(default)]
    pub content: String,
}
