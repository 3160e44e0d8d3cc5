//! Note CRUD operations.

use std::sync::Arc;

use tracing::info;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_database::repositories::note::NoteRepository;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

/// Manages the flat notes table. No hierarchy; unrelated to the
/// filesystem tree.
#[derive(Debug, Clone)]
pub struct NoteService {
    note_repo: Arc<NoteRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Gets a note by ID.
    pub async fn get(&self, id: &str) -> AppResult<Note> {
        self.note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))
    }

    /// Lists all notes, newest date first.
    pub async fn list(&self) -> AppResult<Vec<Note>> {
        self.note_repo.find_all().await
    }

    /// Lists notes whose date starts with the given prefix, so `2024`,
    /// `2024-03`, and `2024-03-10` all work.
    pub async fn list_by_date(&self, date: &str) -> AppResult<Vec<Note>> {
        let well_formed = !date.is_empty()
            && date.len() <= 10
            && date.chars().all(|c| c.is_ascii_digit() || c == '-');
        if !well_formed {
            return Err(AppError::validation(
                "Invalid date filter. Use YYYY, YYYY-MM, or YYYY-MM-DD",
            ));
        }
        self.note_repo.find_by_date(date).await
    }

    /// Searches note titles and contents for a substring.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Note>> {
        if query.trim().is_empty() {
            return Err(AppError::validation("Search query is required"));
        }
        self.note_repo.search(query).await
    }

    /// Creates a note.
    pub async fn create(&self, req: CreateNote) -> AppResult<Note> {
        let note = self.note_repo.create(&req).await?;
        info!(note_id = %note.id, "Note created");
        Ok(note)
    }

    /// Replaces a note's fields.
    pub async fn update(&self, id: &str, req: UpdateNote) -> AppResult<Note> {
        let note = self.note_repo.update(id, &req).await?;
        info!(note_id = %note.id, "Note updated");
        Ok(note)
    }

    /// Deletes a note.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.note_repo.delete(id).await?;
        info!(note_id = %id, "Note deleted");
        Ok(())
    }
}
