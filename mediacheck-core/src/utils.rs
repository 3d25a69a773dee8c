//! Utility functions for formatting paths and diagnostics.
//!
//! All lengths here are counted in characters rather than bytes so that
//! non-ASCII file names and error messages are never split mid-character.

use std::path::Path;

/// Keeps at most `limit` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Shortens a path for the fixed-width report column.
///
/// Paths of at most `width` characters are returned unchanged; longer ones
/// become `...` followed by their last `width - 3` characters.
#[must_use]
pub fn display_path(path: &str, width: usize) -> String {
    let len = path.chars().count();
    if len <= width {
        return path.to_string();
    }
    let keep = width.saturating_sub(3);
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{tail}")
}

/// Pads `text` with spaces to `width` characters; longer text is left as is.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Returns `path` relative to `root` as a display string, falling back to the
/// full path when it does not live under `root`.
#[must_use]
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
