//! Writer and reader for `\n\n--TAGS--\n[...]` blocks.
//!
//! ## Round Trip
//! ```text
//! serialize("  Camiseta ", ["Talla: L"])
//!     = "Camiseta\n\n--TAGS--\n[{\"name\":\"Talla\",\"value\":\"L\"}]"
//! parse(...) = [Talla = L]
//!
//! serialize("  Camiseta ", []) = "Camiseta"      (no block written)
//! ```

use tracing::warn;

use crate::error::TagError;
use crate::types::{ParsedTag, TagInput};

/// Marker that opens a tag block, blank line included.
pub const BLOCK_SENTINEL: &str = "\n\n--TAGS--\n";

/// Normalizes form input into tags.
///
/// Text is split on whichever of `:` or `=` comes first, both sides
/// trimmed. Text without a delimiter becomes a name with an empty value.
pub fn normalize_tags(tags: &[TagInput]) -> Vec<ParsedTag> {
    tags.iter().map(normalize_tag).collect()
}

fn normalize_tag(tag: &TagInput) -> ParsedTag {
    match tag {
        TagInput::Pair(tag) => tag.clone(),
        TagInput::Text(text) => match text.split_once([':', '=']) {
            Some((name, value)) => ParsedTag::new(name.trim(), value.trim()),
            None => ParsedTag::new(text.trim(), ""),
        },
    }
}

/// Appends a tag block to a description.
///
/// Any tag block already in the description is dropped and the rest is
/// trimmed, so saving an edited record replaces its tags. With no tags,
/// that trimmed text is returned as is.
///
/// ## Example
/// ```rust
/// use tienda_core::tags::{parse_tags_from_description_block, serialize_tags_to_description};
/// use tienda_core::{ParsedTag, TagInput};
///
/// let stored = serialize_tags_to_description("  Camiseta ", &[TagInput::from("Talla: L")]);
/// assert_eq!(stored, "Camiseta\n\n--TAGS--\n[{\"name\":\"Talla\",\"value\":\"L\"}]");
/// assert_eq!(
///     parse_tags_from_description_block(&stored),
///     vec![ParsedTag::new("Talla", "L")]
/// );
///
/// assert_eq!(serialize_tags_to_description("  Camiseta ", &[]), "Camiseta");
/// ```
pub fn serialize_tags_to_description(description: &str, tags: &[TagInput]) -> String {
    let base = strip_block(description).trim();
    if tags.is_empty() {
        return base.to_string();
    }

    match serde_json::to_string(&normalize_tags(tags)) {
        Ok(json) => format!("{base}{BLOCK_SENTINEL}{json}"),
        Err(e) => {
            warn!(error = %e, "Failed to encode tags, keeping description only");
            base.to_string()
        }
    }
}

/// Reads the tag block, or explains why it could not.
pub fn try_parse_block(description: &str) -> Result<Vec<ParsedTag>, TagError> {
    let start = description
        .find(BLOCK_SENTINEL)
        .ok_or(TagError::MissingSentinel)?;
    let rest = &description[start + BLOCK_SENTINEL.len()..];

    // Stored text gets edited by hand; line breaks inside the JSON are noise
    let cleaned = rest
        .replace(['\r', '\n'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    Ok(serde_json::from_str(&cleaned)?)
}

/// Reads the tag block. Never fails: anything unreadable yields no tags
/// and a warning.
pub fn parse_tags_from_description_block(description: &str) -> Vec<ParsedTag> {
    match try_parse_block(description) {
        Ok(tags) => tags,
        Err(TagError::MissingSentinel) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to parse tags from description");
            Vec::new()
        }
    }
}

/// The description text before the tag block.
pub fn strip_block(description: &str) -> &str {
    match description.find(BLOCK_SENTINEL) {
        Some(start) => &description[..start],
        None => description,
    }
}
