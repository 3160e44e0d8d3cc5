//! Filesystem node CRUD, move and search operations.

use std::sync::Arc;

use tracing::info;

use notehub_core::error::AppError;
use notehub_core::id::generate_id;
use notehub_core::path;
use notehub_core::result::AppResult;
use notehub_database::repositories::node::{NewNode, NodeRepository};
use notehub_entity::node::{CreateNode, MoveNode, Node, NodeKind, UpdateNode};

/// Manages the virtual filesystem tree.
///
/// All writes to `fs_nodes` flow through this service and its repository,
/// which together enforce path uniqueness and parent consistency.
#[derive(Debug, Clone)]
pub struct NodeService {
    node_repo: Arc<NodeRepository>,
}

impl NodeService {
    /// Creates a new node service.
    pub fn new(node_repo: Arc<NodeRepository>) -> Self {
        Self { node_repo }
    }

    /// Gets a node by its full path.
    pub async fn get_by_path(&self, node_path: &str) -> AppResult<Node> {
        self.node_repo
            .find_by_path(node_path)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node at '{node_path}' not found")))
    }

    /// Gets a node by ID.
    pub async fn get_by_id(&self, id: &str) -> AppResult<Node> {
        self.node_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))
    }

    /// Lists the direct children of a folder path, folders first.
    pub async fn list_children(&self, parent_path: &str) -> AppResult<Vec<Node>> {
        self.node_repo.find_children(parent_path).await
    }

    /// Returns every node in the tree in sibling order. Depth is not
    /// included; callers derive it from the path when they need it.
    pub async fn full_tree(&self) -> AppResult<Vec<Node>> {
        self.node_repo.find_all().await
    }

    /// Creates a new file or folder.
    ///
    /// Fails with `ParentNotFound` when the parent folder is missing and
    /// `PathConflict` when the computed path is already taken.
    pub async fn create(&self, req: CreateNode) -> AppResult<Node> {
        let name = path::validate_name(&req.name)?;
        let parent_path = path::normalize_parent(&req.parent_path)?;

        if parent_path != path::ROOT && !self.node_repo.folder_exists(&parent_path).await? {
            return Err(AppError::parent_not_found(format!(
                "Parent folder '{parent_path}' not found"
            )));
        }

        let node_path = path::build_path(&parent_path, &name);
        if self.node_repo.find_by_path(&node_path).await?.is_some() {
            return Err(AppError::path_conflict(format!(
                "Path '{node_path}' already exists"
            )));
        }

        // Folders carry no content.
        let content = match req.kind {
            NodeKind::Folder => String::new(),
            NodeKind::File => req.content,
        };

        let node = self
            .node_repo
            .insert(&NewNode {
                id: generate_id(),
                kind: req.kind,
                name,
                path: node_path,
                parent_path,
                content,
                is_daily: req.is_daily,
                sort_order: req.sort_order,
            })
            .await?;

        info!(node_id = %node.id, kind = %node.kind, path = %node.path, "Node created");
        Ok(node)
    }

    /// Updates a node's content and/or sort order.
    ///
    /// Names are deliberately not updatable here; a rename always goes
    /// through [`NodeService::move_node`] so the materialized path stays
    /// consistent with the name.
    pub async fn update(&self, id: &str, req: UpdateNode) -> AppResult<Node> {
        let node = self.get_by_id(id).await?;

        // Content is meaningless for folders; drop it rather than store it.
        let content = if node.is_folder() {
            None
        } else {
            req.content
        };

        let node = self
            .node_repo
            .update(id, content.as_deref(), req.sort_order)
            .await?;

        info!(node_id = %node.id, path = %node.path, "Node updated");
        Ok(node)
    }

    /// Moves and/or renames a node. Folder moves rewrite the paths of the
    /// entire descendant set atomically.
    pub async fn move_node(&self, id: &str, req: MoveNode) -> AppResult<Node> {
        let new_name = match &req.new_name {
            Some(name) => Some(path::validate_name(name)?),
            None => None,
        };
        let new_parent = match &req.new_parent_path {
            Some(parent) => Some(path::normalize_parent(parent)?),
            None => None,
        };

        let node = self
            .node_repo
            .move_node(id, new_parent.as_deref(), new_name.as_deref())
            .await?;

        info!(node_id = %node.id, path = %node.path, "Node moved");
        Ok(node)
    }

    /// Deletes a node; folders cascade to all descendants.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let node = self.node_repo.delete(id).await?;
        info!(node_id = %node.id, path = %node.path, "Node deleted");
        Ok(())
    }

    /// Searches file names and contents for a substring.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Node>> {
        if query.trim().is_empty() {
            return Err(AppError::validation("Search query is required"));
        }
        self.node_repo.search_files(query).await
    }
}
