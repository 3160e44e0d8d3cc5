//! # notehub-api
//!
//! HTTP API layer for NoteHub built on Axum.
//!
//! Provides the REST endpoints for notes, the node tree, and daily notes,
//! plus middleware (CORS, tracing), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
