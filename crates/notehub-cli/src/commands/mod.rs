//! CLI command definitions and dispatch.

pub mod fs;
pub mod migrate;
pub mod note;
pub mod serve;
pub mod sync;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use notehub_core::error::AppError;

/// NoteHub — personal note and file tree backend
#[derive(Debug, Parser)]
#[command(name = "notehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the NoteHub server
    Serve(serve::ServeArgs),
    /// Run database migrations
    Migrate(migrate::MigrateArgs),
    /// Browse and edit the node tree
    Fs(fs::FsArgs),
    /// Manage flat notes
    Note(note::NoteArgs),
    /// Mirror local files into the store
    Sync(sync::SyncArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Fs(args) => fs::execute(args, &self.config, self.format).await,
            Commands::Note(args) => note::execute(args, &self.config, self.format).await,
            Commands::Sync(args) => sync::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<notehub_core::config::AppConfig, AppError> {
    notehub_core::config::AppConfig::load(config_path)
}

/// Helper: create database pool from config, with migrations applied
pub async fn create_db_pool(
    config: &notehub_core::config::AppConfig,
) -> Result<sqlx::SqlitePool, AppError> {
    let pool = notehub_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();
    notehub_database::migration::run_migrations(&pool).await?;
    Ok(pool)
}
