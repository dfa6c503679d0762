//! Reader for `--TAGS--\n[...]` blocks.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TagError;
use crate::types::ParsedTag;

/// Marker that opens a JSON tag block.
pub const JSON_BLOCK_SENTINEL: &str = "--TAGS--\n";

/// Reads the tags out of a description, or explains why it could not.
///
/// The array ends at the first `]` after the sentinel; trailing text is
/// ignored.
pub fn try_parse_json_block(description: &str) -> Result<Vec<ParsedTag>, TagError> {
    let start = description
        .find(JSON_BLOCK_SENTINEL)
        .ok_or(TagError::MissingSentinel)?;
    let rest = &description[start + JSON_BLOCK_SENTINEL.len()..];
    let end = rest.find(']').ok_or(TagError::MissingArrayEnd)?;

    let items: Vec<Value> = serde_json::from_str(&rest[..=end])?;

    Ok(items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(normalize_entry)
        .collect())
}

/// Reads the tags out of a description. Never fails: anything unreadable
/// yields no tags.
///
/// ## Example
/// ```rust
/// use tienda_core::tags::parse_tags_from_description_json_block;
/// use tienda_core::ParsedTag;
///
/// let tags = parse_tags_from_description_json_block(
///     "--TAGS--\n[{\"name\":\"Talla\",\"value\":\"L\"}] trailing junk",
/// );
/// assert_eq!(tags, vec![ParsedTag::new("Talla", "L")]);
///
/// assert!(parse_tags_from_description_json_block("no sentinel here").is_empty());
/// ```
pub fn parse_tags_from_description_json_block(description: &str) -> Vec<ParsedTag> {
    match try_parse_json_block(description) {
        Ok(tags) => tags,
        Err(TagError::MissingSentinel) => Vec::new(),
        Err(e) => {
            debug!(error = %e, "Ignoring unreadable tag block");
            Vec::new()
        }
    }
}

/// The description text before the tag block, trailing whitespace removed.
pub fn strip_json_block(description: &str) -> &str {
    match description.find(JSON_BLOCK_SENTINEL) {
        Some(start) => description[..start].trim_end(),
        None => description,
    }
}

/// Turns one array element into a tag.
///
/// Both sides empty drops the element; one side empty borrows the other.
fn normalize_entry(entry: &Map<String, Value>) -> Option<ParsedTag> {
    let name = field_text(entry, "name")
        .or_else(|| field_text(entry, "label"))
        .or_else(|| field_text(entry, "key"));
    let value = field_text(entry, "value").or_else(|| field_text(entry, "val"));

    match (name, value) {
        (None, None) => None,
        (Some(name), None) => Some(ParsedTag::new(name.clone(), name)),
        (None, Some(value)) => Some(ParsedTag::new(value.clone(), value)),
        (Some(name), Some(value)) => Some(ParsedTag::new(name, value)),
    }
}

/// Non-empty text of a field; numbers and booleans are stringified.
fn field_text(entry: &Map<String, Value>, field: &str) -> Option<String> {
    match entry.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
