//! Application builder — wires repositories, services, router, and
//! middleware into an Axum app.

use std::sync::Arc;

use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use notehub_core::config::AppConfig;
use notehub_database::repositories::node::NodeRepository;
use notehub_database::repositories::note::NoteRepository;
use notehub_service::daily::DailyService;
use notehub_service::node::NodeService;
use notehub_service::note::NoteService;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Wires repositories and services over the pool into an [`AppState`].
pub fn build_state(config: AppConfig, db_pool: SqlitePool) -> AppState {
    let node_repo = Arc::new(NodeRepository::new(db_pool.clone()));
    let note_repo = Arc::new(NoteRepository::new(db_pool.clone()));

    let node_service = Arc::new(NodeService::new(Arc::clone(&node_repo)));
    let note_service = Arc::new(NoteService::new(Arc::clone(&note_repo)));
    let daily_service = Arc::new(DailyService::new(
        Arc::clone(&node_service),
        Arc::clone(&node_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        node_repo,
        note_repo,
        node_service,
        note_service,
        daily_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server);
    let timeout = TimeoutLayer::new(Duration::from_secs(
        state.config.server.request_timeout_seconds,
    ));

    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(timeout)
        .layer(cors)
}
