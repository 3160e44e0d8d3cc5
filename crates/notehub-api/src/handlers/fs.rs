//! Virtual filesystem handlers: tree, node CRUD, move, search.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::error::ApiError;
use notehub_entity::node::{CreateNode, MoveNode, Node, UpdateNode};
use notehub_service::node::tree;

use crate::dto::request::{NodePathQuery, SearchQuery, TreeQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/fs/tree?parent_path=...
///
/// Without `parent_path` returns the whole tree nested from the root;
/// with it, the direct children of that folder as a flat list.
pub async fn get_tree(
    State(state): State<AppState>,
    Query(params): Query<TreeQuery>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let data = match params.parent_path {
        Some(parent) => {
            let children = state.node_service.list_children(&parent).await?;
            serde_json::to_value(children)?
        }
        None => {
            let nodes = state.node_service.full_tree().await?;
            serde_json::to_value(tree::nest(&nodes))?
        }
    };
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/fs/node?path=...
pub async fn get_node_by_path(
    State(state): State<AppState>,
    Query(params): Query<NodePathQuery>,
) -> Result<Json<ApiResponse<Node>>, ApiError> {
    let node = state.node_service.get_by_path(&params.path).await?;
    Ok(Json(ApiResponse::ok(node)))
}

/// GET /api/fs/node/:id
pub async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Node>>, ApiError> {
    let node = state.node_service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::ok(node)))
}

/// POST /api/fs/node
pub async fn create_node(
    State(state): State<AppState>,
    Json(req): Json<CreateNode>,
) -> Result<(StatusCode, Json<ApiResponse<Node>>), ApiError> {
    let node = state.node_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(node))))
}

/// PUT /api/fs/node/:id
pub async fn update_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNode>,
) -> Result<Json<ApiResponse<Node>>, ApiError> {
    let node = state.node_service.update(&id, req).await?;
    Ok(Json(ApiResponse::ok(node)))
}

/// POST /api/fs/move/:id
pub async fn move_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveNode>,
) -> Result<Json<ApiResponse<Node>>, ApiError> {
    let node = state.node_service.move_node(&id, req).await?;
    Ok(Json(ApiResponse::ok(node)))
}

/// DELETE /api/fs/node/:id
pub async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.node_service.delete(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Node deleted"))))
}

/// GET /api/fs/search?q=...
pub async fn search_nodes(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Node>>>, ApiError> {
    let nodes = state.node_service.search(&params.q).await?;
    Ok(Json(ApiResponse::ok(nodes)))
}
