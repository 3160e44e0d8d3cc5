//! Filesystem node repository.
//!
//! Sole writer to the `fs_nodes` table. The tree is a materialized-path
//! encoding, so "all descendants of X" is a `LIKE 'X/%'` prefix match and
//! a folder move is a bulk prefix rewrite instead of a recursive walk.
//! Every multi-row mutation (move, delete) runs inside one transaction;
//! a failure anywhere rolls back the whole cascade.

use chrono::Utc;
use sqlx::SqlitePool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::path;
use notehub_core::result::AppResult;
use notehub_entity::node::{Node, NodeKind};

/// Row ordering shared by all listings: folders first (`kind` is text, and
/// `'folder' > 'file'`, so `DESC` sorts folders ahead), then explicit sort
/// order, then name.
const SIBLING_ORDER: &str = "ORDER BY kind DESC, sort_order ASC, name ASC";

/// Repository for filesystem node CRUD, cascading move/delete, and search.
#[derive(Debug, Clone)]
pub struct NodeRepository {
    pool: SqlitePool,
}

/// Fully-resolved insert data (id, path and timestamps already computed).
#[derive(Debug, Clone)]
pub struct NewNode {
    /// Generated identifier.
    pub id: String,
    /// File or folder.
    pub kind: NodeKind,
    /// Final path segment.
    pub name: String,
    /// Full materialized path.
    pub path: String,
    /// Containing folder path.
    pub parent_path: String,
    /// Initial content.
    pub content: String,
    /// Daily-note flag.
    pub is_daily: bool,
    /// Display ordering.
    pub sort_order: i64,
}

impl NodeRepository {
    /// Create a new node repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a node by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Node>> {
        sqlx::query_as::<_, Node>("SELECT * FROM fs_nodes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find node", e))
    }

    /// Find a node by exact path.
    pub async fn find_by_path(&self, node_path: &str) -> AppResult<Option<Node>> {
        sqlx::query_as::<_, Node>("SELECT * FROM fs_nodes WHERE path = ?")
            .bind(node_path)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find node by path", e)
            })
    }

    /// Check whether a folder exists at `folder_path`.
    pub async fn folder_exists(&self, folder_path: &str) -> AppResult<bool> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM fs_nodes WHERE path = ? AND kind = 'folder'")
                .bind(folder_path)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check folder", e)
                })?;
        Ok(found.is_some())
    }

    /// List direct children of a folder path.
    pub async fn find_children(&self, parent_path: &str) -> AppResult<Vec<Node>> {
        sqlx::query_as::<_, Node>(&format!(
            "SELECT * FROM fs_nodes WHERE parent_path = ? {SIBLING_ORDER}"
        ))
        .bind(parent_path)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// List every node in the tree.
    pub async fn find_all(&self) -> AppResult<Vec<Node>> {
        sqlx::query_as::<_, Node>(&format!("SELECT * FROM fs_nodes {SIBLING_ORDER}"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list nodes", e))
    }

    /// Insert a new node row.
    ///
    /// The unique index on `path` is the last line of defense against
    /// concurrent creates; a violation maps to `PathConflict`.
    pub async fn insert(&self, data: &NewNode) -> AppResult<Node> {
        let now = Utc::now();
        sqlx::query_as::<_, Node>(
            "INSERT INTO fs_nodes \
                (id, kind, name, path, parent_path, content, is_daily, sort_order, created, updated) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.id)
        .bind(data.kind)
        .bind(&data.name)
        .bind(&data.path)
        .bind(&data.parent_path)
        .bind(&data.content)
        .bind(data.is_daily)
        .bind(data.sort_order)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::path_conflict(format!("Path '{}' already exists", data.path))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create node", e),
        })
    }

    /// Update a node's content and/or sort order. Absent fields are left
    /// unchanged. Returns the fresh row, or `NotFound`.
    pub async fn update(
        &self,
        id: &str,
        content: Option<&str>,
        sort_order: Option<i64>,
    ) -> AppResult<Node> {
        sqlx::query_as::<_, Node>(
            "UPDATE fs_nodes SET \
                content = COALESCE(?, content), \
                sort_order = COALESCE(?, sort_order), \
                updated = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(content)
        .bind(sort_order)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update node", e))?
        .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))
    }

    /// Move or rename a node, rewriting every descendant path when the
    /// node is a folder.
    ///
    /// The lookup, destination-conflict check, root-row update, and bulk
    /// descendant rewrite all happen inside one transaction, so a failure
    /// at any point leaves the tree untouched.
    pub async fn move_node(
        &self,
        id: &str,
        new_parent_path: Option<&str>,
        new_name: Option<&str>,
    ) -> AppResult<Node> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin move", e))?;

        let node = sqlx::query_as::<_, Node>("SELECT * FROM fs_nodes WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find node", e))?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))?;

        let new_name = new_name.unwrap_or(&node.name);
        let new_parent = new_parent_path.unwrap_or(&node.parent_path);
        let old_path = node.path.clone();
        let new_path = path::build_path(new_parent, new_name);

        if new_path != old_path {
            // Moving a folder under its own subtree would rewrite the
            // destination along with the source and corrupt the tree.
            if node.is_folder() && new_path.starts_with(&format!("{old_path}/")) {
                return Err(AppError::validation(
                    "Cannot move a folder into its own subtree",
                ));
            }

            let occupied: Option<i32> =
                sqlx::query_scalar("SELECT 1 FROM fs_nodes WHERE path = ? AND id != ?")
                    .bind(&new_path)
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to check destination", e)
                    })?;
            if occupied.is_some() {
                return Err(AppError::path_conflict(format!(
                    "Destination path '{new_path}' already exists"
                )));
            }
        }

        let now = Utc::now();

        sqlx::query(
            "UPDATE fs_nodes SET name = ?, path = ?, parent_path = ?, updated = ? WHERE id = ?",
        )
        .bind(new_name)
        .bind(&new_path)
        .bind(new_parent)
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move node", e))?;

        if node.is_folder() && new_path != old_path {
            // Bulk prefix rewrite over the whole descendant set. Every
            // descendant's path and parent_path start with old_path, so
            // substr past the old prefix and glue the new one on. For a
            // direct child, substr of parent_path is empty and the result
            // is exactly new_path.
            let prefix_len = (old_path.chars().count() + 1) as i64;
            sqlx::query(
                "UPDATE fs_nodes SET \
                    path = ? || substr(path, ?), \
                    parent_path = ? || substr(parent_path, ?), \
                    updated = ? \
                 WHERE path LIKE ? ESCAPE '\\'",
            )
            .bind(&new_path)
            .bind(prefix_len)
            .bind(&new_path)
            .bind(prefix_len)
            .bind(now)
            .bind(path::descendant_pattern(&old_path))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to rewrite descendants", e)
            })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit move", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))
    }

    /// Delete a node; folders cascade to their entire descendant set.
    /// Both deletions commit as one unit.
    pub async fn delete(&self, id: &str) -> AppResult<Node> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin delete", e))?;

        let node = sqlx::query_as::<_, Node>("SELECT * FROM fs_nodes WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find node", e))?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))?;

        if node.is_folder() {
            sqlx::query("DELETE FROM fs_nodes WHERE path LIKE ? ESCAPE '\\'")
                .bind(path::descendant_pattern(&node.path))
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete descendants", e)
                })?;
        }

        sqlx::query("DELETE FROM fs_nodes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete node", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit delete", e))?;

        Ok(node)
    }

    /// Case-insensitive substring search over file names and contents,
    /// most recently updated first.
    pub async fn search_files(&self, query: &str) -> AppResult<Vec<Node>> {
        let pattern = format!("%{}%", path::escape_like(query));
        sqlx::query_as::<_, Node>(
            "SELECT * FROM fs_nodes \
             WHERE kind = 'file' AND (name LIKE ? ESCAPE '\\' OR content LIKE ? ESCAPE '\\') \
             ORDER BY updated DESC",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search files", e))
    }

    /// List daily-note files, path descending (newest date first).
    pub async fn find_daily_files(&self) -> AppResult<Vec<Node>> {
        sqlx::query_as::<_, Node>(
            "SELECT * FROM fs_nodes WHERE is_daily = 1 AND kind = 'file' ORDER BY path DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list daily files", e))
    }

    /// Count daily-note files.
    pub async fn count_daily_files(&self) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM fs_nodes WHERE is_daily = 1 AND kind = 'file'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count daily files", e)
                })?;
        Ok(count as u64)
    }
}
