//! Daily-note operations.
//!
//! Daily notes are plain file nodes under `/daily`, one per calendar
//! date, flagged `is_daily`. All writes go through the node service so
//! the tree invariants hold for them like any other file.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_database::repositories::node::NodeRepository;
use notehub_entity::daily::{DailyList, DailyNote, DailyYear};
use notehub_entity::node::{CreateNode, Node, NodeKind, UpdateNode};

use crate::node::NodeService;

/// The folder all daily notes live in.
const DAILY_FOLDER: &str = "/daily";

/// Daily-notes storage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConfig {
    /// Storage backend label.
    pub storage: String,
    /// Number of daily-note files.
    pub count: u64,
}

/// Manages daily notes on top of the node store.
#[derive(Debug, Clone)]
pub struct DailyService {
    nodes: Arc<NodeService>,
    node_repo: Arc<NodeRepository>,
}

impl DailyService {
    /// Creates a new daily-note service.
    pub fn new(nodes: Arc<NodeService>, node_repo: Arc<NodeRepository>) -> Self {
        Self { nodes, node_repo }
    }

    /// Gets the daily note for a date, creating it (and the `/daily`
    /// folder) on first access. Returns the note and whether it was
    /// freshly created.
    pub async fn get_or_create(&self, date: &str) -> AppResult<(DailyNote, bool)> {
        let parsed = parse_date(date)?;
        let date = canonical_date(parsed);

        if let Some(node) = self.node_repo.find_by_path(&date_to_path(&date)).await? {
            return Ok((to_daily_note(node, &date, true), false));
        }

        let node = self
            .create_daily_file(&date, default_content(parsed))
            .await?;
        Ok((to_daily_note(node, &date, true), true))
    }

    /// Sets the content of a date's daily note, creating it if absent.
    /// Returns the note and whether it was freshly created.
    pub async fn upsert(&self, date: &str, content: String) -> AppResult<(DailyNote, bool)> {
        let parsed = parse_date(date)?;
        let date = canonical_date(parsed);
        let node_path = date_to_path(&date);

        match self.node_repo.find_by_path(&node_path).await? {
            Some(node) => {
                let node = self
                    .nodes
                    .update(
                        &node.id,
                        UpdateNode {
                            content: Some(content),
                            sort_order: None,
                        },
                    )
                    .await?;
                Ok((to_daily_note(node, &date, true), false))
            }
            None => {
                let content = if content.is_empty() {
                    default_content(parsed)
                } else {
                    content
                };
                let node = self.create_daily_file(&date, content).await?;
                Ok((to_daily_note(node, &date, true), true))
            }
        }
    }

    /// Deletes a date's daily note.
    pub async fn delete(&self, date: &str) -> AppResult<()> {
        let date = canonical_date(parse_date(date)?);
        let node = self
            .node_repo
            .find_by_path(&date_to_path(&date))
            .await?
            .filter(|n| n.is_daily)
            .ok_or_else(|| AppError::not_found(format!("Daily note for {date} not found")))?;
        self.nodes.delete(&node.id).await
    }

    /// Lists all daily notes grouped by year, years and dates descending.
    pub async fn list(&self) -> AppResult<DailyList> {
        let files = self.node_repo.find_daily_files().await?;

        let mut years: Vec<DailyYear> = Vec::new();
        for node in files {
            let Some(date) = date_from_path(&node.path) else {
                continue;
            };
            let year = date[..4].to_string();
            let note = to_daily_note(node, &date, false);

            match years.iter_mut().find(|y| y.year == year) {
                Some(group) => group.notes.push(note),
                None => years.push(DailyYear {
                    year,
                    notes: vec![note],
                }),
            }
        }

        // The repository returns paths descending, so notes within a year
        // are already newest-first; order the year groups the same way.
        years.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(DailyList { years })
    }

    /// Reports the daily-note storage backend and file count.
    pub async fn config(&self) -> AppResult<DailyConfig> {
        Ok(DailyConfig {
            storage: "sqlite".to_string(),
            count: self.node_repo.count_daily_files().await?,
        })
    }

    /// Create the file node for a date, making sure `/daily` exists.
    async fn create_daily_file(&self, date: &str, content: String) -> AppResult<Node> {
        self.ensure_daily_folder().await?;

        let node = self
            .nodes
            .create(CreateNode {
                kind: NodeKind::File,
                name: format!("{date}.md"),
                parent_path: DAILY_FOLDER.to_string(),
                content,
                is_daily: true,
                sort_order: 0,
            })
            .await?;

        info!(date = %date, path = %node.path, "Daily note created");
        Ok(node)
    }

    /// Create the `/daily` folder if it does not exist yet.
    async fn ensure_daily_folder(&self) -> AppResult<()> {
        if self.node_repo.folder_exists(DAILY_FOLDER).await? {
            return Ok(());
        }
        match self
            .nodes
            .create(CreateNode {
                kind: NodeKind::Folder,
                name: "daily".to_string(),
                parent_path: "/".to_string(),
                content: String::new(),
                is_daily: false,
                sort_order: 0,
            })
            .await
        {
            Ok(_) => Ok(()),
            // Lost a race with another request creating the same folder.
            Err(e) if e.kind == ErrorKind::PathConflict => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Parse and validate a `YYYY-MM-DD` date string.
fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Invalid date format. Use YYYY-MM-DD"))
}

/// Zero-padded `YYYY-MM-DD` form of a date. chrono parses unpadded
/// input like `2024-1-2`, so paths are always built from this form.
fn canonical_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Path of the daily note for a date: `/daily/YYYY-MM-DD.md`.
fn date_to_path(date: &str) -> String {
    format!("{DAILY_FOLDER}/{date}.md")
}

/// Extract the date from a daily-note path, if it has the expected shape.
fn date_from_path(node_path: &str) -> Option<String> {
    let name = node_path.strip_prefix("/daily/")?;
    let date = name.strip_suffix(".md")?;
    let parsed = parse_date(date).ok()?;
    (canonical_date(parsed) == date).then(|| date.to_string())
}

/// Seed content for a fresh daily note: a heading with the long-form date.
fn default_content(date: NaiveDate) -> String {
    format!("# {}\n\n", date.format("%B %-d, %Y"))
}

/// Convert a node row into the daily-note view.
fn to_daily_note(node: Node, date: &str, with_content: bool) -> DailyNote {
    DailyNote {
        id: node.id,
        date: date.to_string(),
        name: node.name,
        path: node.path,
        content: with_content.then_some(node.content),
        created: node.created,
        updated: node.updated,
    }
}
