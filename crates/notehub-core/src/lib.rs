//! # notehub-core
//!
//! Core crate for NoteHub. Contains configuration schemas, the pure path
//! model for the virtual filesystem, identifier generation, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other NoteHub crates.

pub mod config;
pub mod error;
pub mod id;
pub mod path;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
