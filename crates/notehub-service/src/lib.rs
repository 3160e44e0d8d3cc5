//! # notehub-service
//!
//! Business logic services for NoteHub. Services validate input, enforce
//! the node-store invariants together with the repositories, and log
//! mutations; they hold no state beyond `Arc`'d repositories.

pub mod daily;
pub mod node;
pub mod note;

pub use daily::DailyService;
pub use node::NodeService;
pub use note::NoteService;
