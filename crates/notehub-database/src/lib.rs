//! # notehub-database
//!
//! SQLite database connection management and concrete repository
//! implementations for all NoteHub entities. The node repository is the
//! sole writer to the `fs_nodes` table and therefore the enforcer of the
//! path invariants.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
