//! Presentation cleanup for provider strings
//!
//! Provider titles tend to carry marketplace noise ("- 16GB - Space Gray",
//! "| Walmart", "(Pack of 6)"). These helpers trim them down to something
//! that fits on a product card.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::known;

pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const SEARCH_QUERY_MAX_CHARS: usize = 100;

fn parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\([^)]*\)").expect("valid regex"))
}

fn size_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i) size .*$").expect("valid regex"))
}

/// Normalize a product name for display.
///
/// Cuts at the first `" - "` or `" | "`, drops parenthetical groups and
/// anything after a `" size "` marker. Falls back to the trimmed input when
/// nothing would be left.
pub fn normalize_name(raw: &str) -> String {
    let mut name = raw.trim();

    let cut = [" - ", " | "]
        .iter()
        .filter_map(|delim| name.find(delim))
        .min();
    if let Some(idx) = cut {
        name = &name[..idx];
    }

    let without_parens = parenthetical().replace_all(name, "");
    let without_size = size_marker().replace(&without_parens, "");
    let cleaned = without_size.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        raw.trim().to_string()
    } else {
        cleaned
    }
}

/// Truncate to at most `max` characters (not bytes)
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

pub fn truncate_description(text: &str) -> String {
    truncate_chars(text.trim(), DESCRIPTION_MAX_CHARS)
}

/// Join the usable parts of a search query with single spaces.
/// Blank parts and the "Unknown" placeholder are skipped.
pub fn search_query<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let query = parts
        .into_iter()
        .flatten()
        .filter_map(known)
        .collect::<Vec<_>>()
        .join(" ");
    let query = truncate_chars(&query, SEARCH_QUERY_MAX_CHARS);
    let query = query.trim();

    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}
