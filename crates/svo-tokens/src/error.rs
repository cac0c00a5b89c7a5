//! Errors from the fallible edges of the token tables.
//!
//! Lookups through the key enums cannot fail. Only parsing a token name or
//! color string, and serializing the tables, can produce a [`TokenError`].

use thiserror::Error;

/// Error returned when parsing a token name or value, or exporting the tables.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A name did not match any key of the given token kind
    #[error("unknown {kind} token '{key}'")]
    UnknownKey { kind: &'static str, key: String },
    /// A string was not of the form `hsl(H S% L%)`
    #[error("invalid hsl color '{0}'")]
    InvalidHsl(String),
    #[error("failed to serialize tokens as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize tokens as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TokenError {
    pub(crate) fn unknown(kind: &'static str, key: &str) -> Self {
        TokenError::UnknownKey {
            kind,
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_error_display() {
        let err = TokenError::unknown("font size", "10xl");
        let msg = err.to_string();
        assert!(msg.contains("font size"));
        assert!(msg.contains("10xl"));
    }

    #[test]
    fn test_invalid_hsl_error_display() {
        let err = TokenError::InvalidHsl("rgb(0 0 0)".to_string());
        assert_eq!(err.to_string(), "invalid hsl color 'rgb(0 0 0)'");
    }
}
