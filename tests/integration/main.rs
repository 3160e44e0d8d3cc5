//! Integration tests exercising the full HTTP API over in-memory SQLite.

mod helpers;

mod daily_test;
mod fs_test;
mod note_test;
