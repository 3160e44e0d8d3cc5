//! Pure path arithmetic for the virtual filesystem.
//!
//! Nodes are addressed by materialized paths: the full location stored as a
//! literal string beginning with `/`, with `/` itself as the synthetic root.
//! Everything here is side-effect free; the node store composes these
//! helpers into its create/move/delete operations.

use crate::error::AppError;
use crate::result::AppResult;

/// The synthetic root path. No node row exists for it.
pub const ROOT: &str = "/";

/// Join a parent path and a final segment into a full path.
///
/// `build_path("/", "a")` is `/a`; `build_path("/a", "b")` is `/a/b`.
pub fn build_path(parent_path: &str, name: &str) -> String {
    if parent_path == ROOT {
        format!("/{name}")
    } else {
        format!("{parent_path}/{name}")
    }
}

/// Split a full path into `(parent_path, name)`.
///
/// Inverse of [`build_path`]: a top-level path like `/a` splits into
/// `("/", "a")`. Splitting the root itself yields `("/", "")`.
pub fn split_path(path: &str) -> (String, String) {
    match path.rfind('/') {
        Some(0) => (ROOT.to_string(), path[1..].to_string()),
        Some(idx) => (path[..idx].to_string(), path[idx + 1..].to_string()),
        None => (ROOT.to_string(), path.to_string()),
    }
}

/// Validate and normalize a node name.
///
/// Rejects names that are empty after trimming and names containing `/`,
/// which would silently create bogus tree levels.
pub fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if trimmed.contains('/') {
        return Err(AppError::validation("Name must not contain '/'"));
    }
    Ok(trimmed.to_string())
}

/// Validate a parent path argument. Defaults to the root when empty.
pub fn normalize_parent(parent_path: &str) -> AppResult<String> {
    let trimmed = parent_path.trim();
    if trimmed.is_empty() {
        return Ok(ROOT.to_string());
    }
    if !trimmed.starts_with('/') {
        return Err(AppError::validation("Parent path must start with '/'"));
    }
    Ok(trimmed.to_string())
}

/// Depth of a path below the root: `/a` is 0, `/a/b` is 1.
pub fn depth(path: &str) -> usize {
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .count()
        .saturating_sub(1)
}

/// Escape SQL `LIKE` wildcards in a literal path so prefix matches cannot
/// over-match paths that happen to contain `%` or `_`. Pairs with
/// `ESCAPE '\'` in the query.
pub fn escape_like(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for ch in literal.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// `LIKE` pattern matching every strict descendant of `path`.
///
/// The trailing `/` keeps sibling prefixes apart: descendants of `/a`
/// match `/a/%`, which never touches `/ab`.
pub fn descendant_pattern(path: &str) -> String {
    format!("{}/%", escape_like(path))
}
