//! Flat note CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use notehub_core::error::AppError;
use notehub_database::repositories::note::NoteRepository;
use notehub_entity::note::{CreateNote, Note};
use notehub_service::note::NoteService;

use crate::output::{self, OutputFormat};

/// Arguments for note commands
#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note subcommand
    #[command(subcommand)]
    pub command: NoteCommand,
}

/// Note subcommands
#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// List all notes, newest first
    List,
    /// Show a note by ID
    Show {
        /// Note ID
        id: String,
    },
    /// Create a note
    Create {
        /// Note title
        #[arg(short, long)]
        title: String,
        /// Note content
        #[arg(long, default_value = "")]
        content: String,
        /// Note date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
    /// Search note titles and content
    Search {
        /// Substring to match
        query: String,
    },
}

/// Note display row
#[derive(Debug, Serialize, Tabled)]
struct NoteRow {
    /// Note ID
    id: String,
    /// Title
    title: String,
    /// Date
    date: String,
    /// Updated at
    updated: String,
}

impl NoteRow {
    fn from_note(n: &Note) -> Self {
        Self {
            id: n.id.clone(),
            title: n.title.clone(),
            date: n.date.clone(),
            updated: n.updated.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute note commands
pub async fn execute(
    args: &NoteArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let service = NoteService::new(Arc::new(NoteRepository::new(pool)));

    match &args.command {
        NoteCommand::List => {
            let notes = service.list().await?;
            let rows: Vec<NoteRow> = notes.iter().map(NoteRow::from_note).collect();
            output::print_list(&rows, format);
        }
        NoteCommand::Show { id } => {
            let note = service.get(id).await?;
            output::print_item(&note, format);
        }
        NoteCommand::Create {
            title,
            content,
            date,
        } => {
            let note = service
                .create(CreateNote {
                    title: title.clone(),
                    content: content.clone(),
                    date: date.clone().unwrap_or_default(),
                })
                .await?;
            output::print_success(&format!("Note '{}' created (id: {})", note.title, note.id));
        }
        NoteCommand::Delete { id } => {
            service.delete(id).await?;
            output::print_success("Note deleted.");
        }
        NoteCommand::Search { query } => {
            let notes = service.search(query).await?;
            let rows: Vec<NoteRow> = notes.iter().map(NoteRow::from_note).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
