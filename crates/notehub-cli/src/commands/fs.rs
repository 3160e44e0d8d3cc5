//! Node tree CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use notehub_core::error::AppError;
use notehub_database::repositories::node::NodeRepository;
use notehub_entity::node::{CreateNode, MoveNode, Node, NodeKind};
use notehub_service::node::{NodeService, tree, tree::TreeNode};

use crate::output::{self, OutputFormat};

/// Print a nested forest with indentation, folders marked by a trailing `/`.
fn print_forest(forest: &[TreeNode]) {
    for entry in forest {
        let indent = "  ".repeat(entry.depth);
        match entry.node.kind {
            NodeKind::Folder => println!("{}├── {}/", indent, entry.node.name),
            NodeKind::File => println!("{}├── {}", indent, entry.node.name),
        }
        print_forest(&entry.children);
    }
}

/// Arguments for fs commands
#[derive(Debug, Args)]
pub struct FsArgs {
    /// Fs subcommand
    #[command(subcommand)]
    pub command: FsCommand,
}

/// Fs subcommands
#[derive(Debug, Subcommand)]
pub enum FsCommand {
    /// List children of a folder
    List {
        /// Folder path (defaults to the root)
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print the whole tree
    Tree,
    /// Show a single node by path
    Show {
        /// Node path
        path: String,
    },
    /// Create a file or folder
    Create {
        /// Node name
        #[arg(short, long)]
        name: String,
        /// Parent folder path
        #[arg(short, long, default_value = "/")]
        parent: String,
        /// Create a folder instead of a file
        #[arg(long)]
        folder: bool,
        /// Initial file content
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Move or rename a node
    Move {
        /// Node ID
        id: String,
        /// New parent folder path
        #[arg(long)]
        parent: Option<String>,
        /// New name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a node (folders cascade)
    Delete {
        /// Node ID
        id: String,
    },
    /// Search file names and content
    Search {
        /// Substring to match
        query: String,
    },
}

/// Node display row
#[derive(Debug, Serialize, Tabled)]
struct NodeRow {
    /// Node ID
    id: String,
    /// Kind
    kind: String,
    /// Path
    path: String,
    /// Updated at
    updated: String,
}

impl NodeRow {
    fn from_node(n: &Node) -> Self {
        Self {
            id: n.id.clone(),
            kind: n.kind.to_string(),
            path: n.path.clone(),
            updated: n.updated.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute fs commands
pub async fn execute(args: &FsArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let service = NodeService::new(Arc::new(NodeRepository::new(pool)));

    match &args.command {
        FsCommand::List { path } => {
            let nodes = service.list_children(path).await?;
            let rows: Vec<NodeRow> = nodes.iter().map(NodeRow::from_node).collect();
            output::print_list(&rows, format);
        }
        FsCommand::Tree => {
            let nodes = service.full_tree().await?;
            println!("/");
            print_forest(&tree::nest(&nodes));
        }
        FsCommand::Show { path } => {
            let node = service.get_by_path(path).await?;
            output::print_item(&node, format);
        }
        FsCommand::Create {
            name,
            parent,
            folder,
            content,
        } => {
            let kind = if *folder {
                NodeKind::Folder
            } else {
                NodeKind::File
            };
            let node = service
                .create(CreateNode {
                    kind,
                    name: name.clone(),
                    parent_path: parent.clone(),
                    content: content.clone(),
                    is_daily: false,
                    sort_order: 0,
                })
                .await?;
            output::print_success(&format!("{} '{}' created (id: {})", kind, node.path, node.id));
        }
        FsCommand::Move { id, parent, name } => {
            let node = service
                .move_node(
                    id,
                    MoveNode {
                        new_parent_path: parent.clone(),
                        new_name: name.clone(),
                    },
                )
                .await?;
            output::print_success(&format!("Node moved to '{}'", node.path));
        }
        FsCommand::Delete { id } => {
            service.delete(id).await?;
            output::print_success("Node deleted.");
        }
        FsCommand::Search { query } => {
            let nodes = service.search(query).await?;
            let rows: Vec<NodeRow> = nodes.iter().map(NodeRow::from_node).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
