//! Text helper functions

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WS_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove HTML tags and collapse whitespace
pub fn strip_html(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");
    WS_RE.replace_all(stripped.trim(), " ").to_string()
}

/// URL-friendly slug
pub fn slugify_string(text: &str) -> String {
    slug::slugify(text)
}

/// Word-wrap text into lines of at most `width` characters
///
/// Words longer than the width get a line of their own.
pub fn splitlines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Serialize a YAML metadata value as JSON
pub fn to_json(value: &serde_yaml::Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parse a JSON string into a YAML metadata value
pub fn from_json(text: &str) -> Result<serde_yaml::Value> {
    Ok(serde_json::from_str(text)?)
}
