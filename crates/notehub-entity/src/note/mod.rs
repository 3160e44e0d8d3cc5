//! Flat note entity.

pub mod model;

pub use model::{CreateNote, Note, UpdateNote};
