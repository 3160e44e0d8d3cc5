//! Virtual filesystem node entity.

pub mod model;

pub use model::{CreateNode, MoveNode, Node, NodeKind, UpdateNode};
