//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table if items.is_empty() => println!("(no matches)"),
        OutputFormat::Table => println!("{}", Table::new(items)),
        OutputFormat::Json => match serde_json::to_string_pretty(items) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("[]"),
        },
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{item:#?}"),
        OutputFormat::Json => match serde_json::to_string_pretty(item) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("{{}}"),
        },
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("ok: {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("warning: {msg}");
}
