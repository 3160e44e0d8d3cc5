//! Note entity model.
//!
//! Notes are a flat, non-hierarchical table; they are unrelated to the
//! filesystem node tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A standalone note.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Opaque unique identifier.
    pub id: String,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Associated date, `YYYY-MM-DD`.
    pub date: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated: DateTime<Utc>,
}

/// Data required to create a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// Note title.
    #[serde(default)]
    pub title: String,
    /// Note body.
    #[serde(default)]
    pub content: String,
    /// Associated date; defaults to today when empty.
    #[serde(default)]
    pub date: String,
}

/// Full update of a note's fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNote {
    /// Note title.
    #[serde(default)]
    pub title: String,
    /// Note body.
    #[serde(default)]
    pub content: String,
    /// Associated date.
    #[serde(default)]
    pub date: String,
}
