//! Filesystem node entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Whether a node is a file or a folder.
///
/// Stored as `"file"` / `"folder"` text. Listings order by this column
/// descending: `"folder"` sorts after `"file"` lexically, so `DESC` puts
/// folders first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum NodeKind {
    /// A text file with content.
    File,
    /// A folder; content is always empty.
    Folder,
}

impl NodeKind {
    /// The stored/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file or folder in the virtual filesystem.
///
/// The tree is encoded entirely through `path` / `parent_path` string
/// prefixes; there is no parent-id column. `path` is globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Node {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// File or folder; immutable after creation.
    pub kind: NodeKind,
    /// Final path segment. Always equals the last segment of `path`.
    pub name: String,
    /// Full materialized path from root, e.g. `/daily/2024-01-01.md`.
    pub path: String,
    /// Path of the containing folder; `/` for top-level nodes.
    pub parent_path: String,
    /// Text body; empty for folders.
    pub content: String,
    /// Marks daily-note files living under `/daily`.
    pub is_daily: bool,
    /// Display ordering among siblings.
    pub sort_order: i64,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated: DateTime<Utc>,
}

impl Node {
    /// Check whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Data required to create a new node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNode {
    /// File or folder.
    pub kind: NodeKind,
    /// Node name (final path segment).
    pub name: String,
    /// Parent folder path; defaults to `/` when empty.
    #[serde(default)]
    pub parent_path: String,
    /// Initial content (ignored for folders).
    #[serde(default)]
    pub content: String,
    /// Daily-note flag.
    #[serde(default)]
    pub is_daily: bool,
    /// Display ordering.
    #[serde(default)]
    pub sort_order: i64,
}

/// Partial update of a node's content and ordering.
///
/// Absent fields are left unchanged. Renaming is deliberately not part of
/// this operation; names only change through [`MoveNode`], which keeps
/// `path` and `parent_path` consistent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNode {
    /// New content, if present.
    pub content: Option<String>,
    /// New sort order, if present.
    pub sort_order: Option<i64>,
}

/// Move/rename request for a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveNode {
    /// Destination folder path; defaults to the current parent.
    pub new_parent_path: Option<String>,
    /// New name; defaults to the current name.
    pub new_name: Option<String>,
}
