//! # Tag Codecs
//!
//! Category tags (`Talla: L`, `Color: Rojo`, ...) have no storage of their
//! own. They ride along at the end of a product's free-text `description`,
//! after a sentinel line, as a JSON array.
//!
//! ## Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  json_block (read only)                                                 │
//! │  ─────────────────────                                                  │
//! │  Camiseta de algodón--TAGS--\n[{"label":"Talla","val":"L"}] ...         │
//! │  • sentinel "--TAGS--\n", no blank line required                        │
//! │  • array ends at the first ']', anything after it is ignored            │
//! │  • name/label/key and value/val field spellings                         │
//! │                                                                         │
//! │  block (read + write)                                                   │
//! │  ────────────────────                                                   │
//! │  Camiseta de algodón\n\n--TAGS--\n[{"name":"Talla","value":"L"}]        │
//! │  • sentinel "\n\n--TAGS--\n"                                            │
//! │  • newlines stripped and whitespace collapsed before parsing            │
//! │  • empty tag list writes no block at all                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two are kept as separate codecs; records written by either are still
//! in the backend.
//!
//! ## Failure Policy
//! Public parsers never fail. A description with a missing sentinel, broken
//! JSON or the wrong shape yields no tags, so a corrupted record still
//! renders. The `try_*` variants report the [`TagError`](crate::TagError).

pub mod block;
pub mod json_block;

pub use block::{
    normalize_tags, parse_tags_from_description_block, serialize_tags_to_description,
    strip_block, try_parse_block, BLOCK_SENTINEL,
};
pub use json_block::{
    parse_tags_from_description_json_block, strip_json_block, try_parse_json_block,
    JSON_BLOCK_SENTINEL,
};
