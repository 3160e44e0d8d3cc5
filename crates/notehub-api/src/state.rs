//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use notehub_core::config::AppConfig;
use notehub_database::repositories::node::NodeRepository;
use notehub_database::repositories::note::NoteRepository;
use notehub_service::daily::DailyService;
use notehub_service::node::NodeService;
use notehub_service::note::NoteService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// SQLite connection pool
    pub db_pool: SqlitePool,

    /// Node repository
    pub node_repo: Arc<NodeRepository>,
    /// Note repository
    pub note_repo: Arc<NoteRepository>,

    /// Node tree service
    pub node_service: Arc<NodeService>,
    /// Flat note service
    pub note_service: Arc<NoteService>,
    /// Daily note service
    pub daily_service: Arc<DailyService>,
}
