//! Mirror a local directory into the node store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Subcommand};

use notehub_core::error::AppError;
use notehub_core::path::split_path;
use notehub_database::repositories::node::NodeRepository;
use notehub_entity::node::{CreateNode, NodeKind, UpdateNode};
use notehub_service::node::NodeService;

use crate::output;

/// Arguments for sync commands
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Sync subcommand
    #[command(subcommand)]
    pub command: SyncCommand,
}

/// Sync subcommands
#[derive(Debug, Subcommand)]
pub enum SyncCommand {
    /// Push a local directory into the store
    Push {
        /// Directory to mirror
        dir: PathBuf,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}

/// How many leading bytes to sniff for NUL when deciding text vs binary.
const SNIFF_LEN: usize = 8000;

#[derive(Debug, Default)]
struct PushStats {
    created: usize,
    updated: usize,
    skipped: usize,
    unchanged: usize,
}

/// Execute sync commands
pub async fn execute(args: &SyncArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let repo = Arc::new(NodeRepository::new(pool));
    let service = NodeService::new(Arc::clone(&repo));

    match &args.command {
        SyncCommand::Push { dir, dry_run } => {
            if !dir.is_dir() {
                return Err(AppError::validation(format!(
                    "'{}' is not a directory",
                    dir.display()
                )));
            }

            let entries = collect_entries(dir)?;
            let mut stats = PushStats::default();

            for entry in &entries {
                push_entry(&repo, &service, dir, entry, *dry_run, &mut stats).await?;
            }

            let verb = if *dry_run { "Would sync" } else { "Synced" };
            output::print_success(&format!(
                "{} '{}': {} created, {} updated, {} unchanged, {} skipped",
                verb,
                dir.display(),
                stats.created,
                stats.updated,
                stats.unchanged,
                stats.skipped
            ));
        }
    }

    Ok(())
}

/// A filesystem entry to mirror, relative to the sync root.
#[derive(Debug)]
struct SyncEntry {
    relative: PathBuf,
    is_dir: bool,
}

/// Walk the directory tree, parents before children, skipping hidden
/// entries.
fn collect_entries(root: &Path) -> Result<Vec<SyncEntry>, AppError> {
    let mut entries = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut children: Vec<PathBuf> = std::fs::read_dir(&dir)
            .map_err(|e| AppError::internal(format!("Failed to read '{}': {}", dir.display(), e)))?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .collect();
        children.sort();

        for child in children {
            let Some(name) = child.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let relative = child
                .strip_prefix(root)
                .map_err(|e| AppError::internal(format!("Path error: {}", e)))?
                .to_path_buf();
            let is_dir = child.is_dir();
            if is_dir {
                pending.push(child);
            }
            entries.push(SyncEntry { relative, is_dir });
        }
    }

    // Stack order interleaves directories; restore parent-first order by
    // path depth, ties by name.
    entries.sort_by(|a, b| {
        let da = a.relative.components().count();
        let db = b.relative.components().count();
        da.cmp(&db).then_with(|| a.relative.cmp(&b.relative))
    });
    Ok(entries)
}

/// Mirror one entry into the store.
async fn push_entry(
    repo: &NodeRepository,
    service: &NodeService,
    root: &Path,
    entry: &SyncEntry,
    dry_run: bool,
    stats: &mut PushStats,
) -> Result<(), AppError> {
    let store_path = to_store_path(&entry.relative);
    let (parent_path, name) = split_path(&store_path);

    if entry.is_dir {
        if repo.find_by_path(&store_path).await?.is_none() {
            if dry_run {
                println!("+ {}/", store_path);
            } else {
                service
                    .create(CreateNode {
                        kind: NodeKind::Folder,
                        name,
                        parent_path,
                        content: String::new(),
                        is_daily: false,
                        sort_order: 0,
                    })
                    .await?;
            }
            stats.created += 1;
        } else {
            stats.unchanged += 1;
        }
        return Ok(());
    }

    let bytes = std::fs::read(root.join(&entry.relative))
        .map_err(|e| AppError::internal(format!("Failed to read '{}': {}", store_path, e)))?;
    if !is_text(&bytes) {
        stats.skipped += 1;
        return Ok(());
    }
    let content = String::from_utf8_lossy(&bytes).into_owned();

    match repo.find_by_path(&store_path).await? {
        Some(node) if node.kind == NodeKind::Folder => {
            output::print_warning(&format!("'{}' exists as a folder, skipping", store_path));
            stats.skipped += 1;
        }
        Some(node) if node.content == content => {
            stats.unchanged += 1;
        }
        Some(node) => {
            if dry_run {
                println!("~ {}", store_path);
            } else {
                service
                    .update(
                        &node.id,
                        UpdateNode {
                            content: Some(content),
                            sort_order: None,
                        },
                    )
                    .await?;
            }
            stats.updated += 1;
        }
        None => {
            if dry_run {
                println!("+ {}", store_path);
            } else {
                service
                    .create(CreateNode {
                        kind: NodeKind::File,
                        name,
                        parent_path,
                        content,
                        is_daily: false,
                        sort_order: 0,
                    })
                    .await?;
            }
            stats.created += 1;
        }
    }

    Ok(())
}

/// Convert a relative filesystem path to a store path: `/a/b/c.md`.
fn to_store_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}

/// Text sniff: no NUL byte in the leading window.
fn is_text(bytes: &[u8]) -> bool {
    !bytes[..bytes.len().min(SNIFF_LEN)].contains(&0)
}
