//! Route definitions for the NoteHub HTTP API.
//!
//! All routes except the health check are organized by domain and mounted
//! under `/api`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(note_routes())
        .merge(fs_routes())
        .merge(daily_routes());

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Flat note CRUD and search
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(handlers::note::list_notes))
        .route("/notes", post(handlers::note::create_note))
        .route("/notes/{id}", get(handlers::note::get_note))
        .route("/notes/{id}", put(handlers::note::update_note))
        .route("/notes/{id}", delete(handlers::note::delete_note))
        .route("/notes/date/{date}", get(handlers::note::notes_by_date))
        .route("/search", get(handlers::note::search_notes))
}

/// Virtual filesystem: tree, node CRUD, move, search
fn fs_routes() -> Router<AppState> {
    Router::new()
        .route("/fs/tree", get(handlers::fs::get_tree))
        .route("/fs/node", get(handlers::fs::get_node_by_path))
        .route("/fs/node", post(handlers::fs::create_node))
        .route("/fs/node/{id}", get(handlers::fs::get_node))
        .route("/fs/node/{id}", put(handlers::fs::update_node))
        .route("/fs/node/{id}", delete(handlers::fs::delete_node))
        .route("/fs/move/{id}", post(handlers::fs::move_node))
        .route("/fs/search", get(handlers::fs::search_nodes))
}

/// Daily notes keyed by date
fn daily_routes() -> Router<AppState> {
    Router::new()
        .route("/daily", get(handlers::daily::list_daily))
        .route("/daily/config", get(handlers::daily::get_config))
        .route("/daily/config", put(handlers::daily::put_config))
        .route("/daily/{date}", get(handlers::daily::get_daily))
        .route("/daily/{date}", put(handlers::daily::put_daily))
        .route("/daily/{date}", delete(handlers::daily::delete_daily))
}
