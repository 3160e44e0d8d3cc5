//! Repository implementations for all NoteHub entities.

pub mod node;
pub mod note;

pub use node::NodeRepository;
pub use note::NoteRepository;
