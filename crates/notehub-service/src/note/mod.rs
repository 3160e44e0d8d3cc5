//! Flat note service.

pub mod service;

pub use service::NoteService;
