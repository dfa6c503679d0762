//! # Error Types
//!
//! Domain-specific error types for tienda-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError        - General domain errors                               │
//! │  ├── TagError     - Why a tag block could not be read                   │
//! │  └── ConfigError  - Config file / environment failures                  │
//! │                                                                         │
//! │  Calculators never error: bad numbers flow through as NaN.              │
//! │  Public tag parsers never error: TagError is swallowed into an          │
//! │  empty tag list and logged. Only the `try_*` parsers expose it.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (feature key, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A feature key that the store does not know about.
    ///
    /// ## When This Occurs
    /// - Toggling a dashboard section that was never registered
    /// - A stale key coming back from saved user preferences
    #[error("Unknown admin feature: {0}")]
    UnknownFeature(String),

    /// Tag block could not be read (wraps TagError).
    #[error("Tag block error: {0}")]
    Tag(#[from] TagError),

    /// Configuration error (wraps ConfigError).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Tag Error
// =============================================================================

/// Reasons a tag block inside a description could not be decoded.
#[derive(Debug, Error)]
pub enum TagError {
    /// The description carries no tag sentinel at all.
    #[error("description has no tag block")]
    MissingSentinel,

    /// The JSON block sentinel is present but no `]` closes the array.
    #[error("tag block has no closing ']'")]
    MissingArrayEnd,

    /// The text after the sentinel is not a JSON array of tags.
    #[error("malformed tag JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for `CoreConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be encoded as TOML.
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A value is syntactically fine but not allowed.
    #[error("{field} is invalid: {reason}")]
    Invalid { field: String, reason: String },

    /// No explicit path was given and no platform config dir exists.
    #[error("no config path available")]
    NoConfigPath,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownFeature("reports".to_string());
        assert_eq!(err.to_string(), "Unknown admin feature: reports");

        let err = ConfigError::Invalid {
            field: "currency_decimals".to_string(),
            reason: "must be at most 4".to_string(),
        };
        assert_eq!(err.to_string(), "currency_decimals is invalid: must be at most 4");
    }

    #[test]
    fn test_tag_error_converts_to_core_error() {
        let core_err: CoreError = TagError::MissingSentinel.into();
        assert!(matches!(core_err, CoreError::Tag(TagError::MissingSentinel)));
        assert_eq!(
            core_err.to_string(),
            "Tag block error: description has no tag block"
        );
    }

    #[test]
    fn test_json_error_converts_to_tag_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let tag_err: TagError = json_err.into();
        assert!(matches!(tag_err, TagError::MalformedJson(_)));
    }
}
