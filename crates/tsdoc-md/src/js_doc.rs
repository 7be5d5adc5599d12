//! Documentation comment extraction
//!
//! Only the first comment in front of a node is considered. It counts as
//! documentation when it opens with `/**`; the markers and the leading `*`
//! gutter of every line are removed.

use crate::node::CommentRange;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading whitespace, one `*` and the whitespace after it, per line
    static ref GUTTER_REGEX: Regex = Regex::new(r"(?m)^[ \t]*\*[ \t]*").unwrap();
}

/// Documentation text for a node given its leading comments
///
/// Returns `None` when there is no comment, when the first comment is not a
/// `/**` comment, or when nothing remains after cleaning.
pub fn leading_doc(comments: &[CommentRange]) -> Option<String> {
    let first = comments.first()?;
    tracing::trace!(raw = %first.text, "leading comment");
    if !first.is_doc() {
        return None;
    }
    let cleaned = extract_doc(&first.text);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Clean one raw comment
///
/// Non-documentation comments (`// ...`, `/* ... */`) yield an empty string.
pub fn extract_doc(raw: &str) -> String {
    if !raw.starts_with("/**") || raw.len() < 5 {
        return String::new();
    }
    let body = raw.get(3..raw.len() - 2).unwrap_or_default();
    let stripped = GUTTER_REGEX.replace_all(body, "");

    stripped
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
