//! Filesystem node service and tree views.

pub mod service;
pub mod tree;

pub use service::NodeService;
pub use tree::TreeNode;
