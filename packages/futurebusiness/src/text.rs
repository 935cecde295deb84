//! Text normalization for free-text fields scraped from the page.

use regex::Regex;
use std::sync::LazyLock;

/// Non-breaking space character.
pub const NBSP: char = '\u{a0}';

/// Literal entity text left behind by markup that was not entity-decoded.
const NBSP_ENTITY: &str = "&nbsp;";

/// Regex pattern for any run of whitespace, including newlines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize scraped text for storage.
///
/// Non-breaking spaces (both the character and a literal `&nbsp;`) are
/// treated as ordinary whitespace, every whitespace run collapses to a single
/// space, and the result is trimmed. Applying it twice gives the same result
/// as applying it once.
///
/// # Examples
/// ```
/// use futurebusiness::text::normalize;
///
/// assert_eq!(normalize("  Second\n   reading\u{a0}"), "Second reading");
/// assert_eq!(normalize("Session&nbsp;2010-12"), "Session 2010-12");
/// ```
pub fn normalize(raw: &str) -> String {
    let spaced = raw.replace(NBSP_ENTITY, " ").replace(NBSP, " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}

/// Strip a label prefix (e.g. "Member in charge:") and normalize the rest.
///
/// Text without the label is normalized unchanged.
pub fn strip_label(raw: &str, label: &str) -> String {
    let text = normalize(raw);
    match text.strip_prefix(label) {
        Some(rest) => rest.trim().to_string(),
        None => text,
    }
}
