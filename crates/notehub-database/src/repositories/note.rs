//! Note repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::id::generate_id;
use notehub_core::path;
use notehub_core::result::AppResult;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

/// Repository for flat note CRUD and search.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a note by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note", e))
    }

    /// List all notes, newest date first.
    pub async fn find_all(&self) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }

    /// List notes whose date starts with `date_prefix`, newest created
    /// first.
    pub async fn find_by_date(&self, date_prefix: &str) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE date LIKE ? ORDER BY created DESC",
        )
        .bind(format!("{date_prefix}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes by date", e))
    }

    /// Case-insensitive substring search over title and content.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Note>> {
        let pattern = format!("%{}%", path::escape_like(query));
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes \
             WHERE title LIKE ? ESCAPE '\\' OR content LIKE ? ESCAPE '\\' \
             ORDER BY date DESC",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search notes", e))
    }

    /// Create a new note. An empty date defaults to today.
    pub async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        let now = Utc::now();
        let date = if data.date.is_empty() {
            now.format("%Y-%m-%d").to_string()
        } else {
            data.date.clone()
        };

        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, title, content, date, created, updated) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(generate_id())
        .bind(&data.title)
        .bind(&data.content)
        .bind(&date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create note", e))
    }

    /// Replace a note's fields. Returns the fresh row, or `NotFound`.
    pub async fn update(&self, id: &str, data: &UpdateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = ?, content = ?, date = ?, updated = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.date)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))?
        .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))
    }

    /// Delete a note. Returns `NotFound` when the id is absent.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Note {id} not found")));
        }
        Ok(())
    }
}
