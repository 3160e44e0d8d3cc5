//! HTTP request handlers, grouped by domain.

pub mod daily;
pub mod fs;
pub mod health;
pub mod note;
