//! Daily-note view models.
//!
//! Daily notes are ordinary file nodes under `/daily` flagged with
//! `is_daily`; these are the shapes the daily API returns, not a separate
//! table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A daily note, one file per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNote {
    /// Underlying node ID.
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// File name, `YYYY-MM-DD.md`.
    pub name: String,
    /// Node path, `/daily/YYYY-MM-DD.md`.
    pub path: String,
    /// Note body; omitted in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated: DateTime<Utc>,
}

/// All daily notes of one calendar year, dates descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyYear {
    /// Four-digit year.
    pub year: String,
    /// Notes in this year.
    pub notes: Vec<DailyNote>,
}

/// Daily notes grouped by year, years descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyList {
    /// Year groups.
    pub years: Vec<DailyYear>,
}
