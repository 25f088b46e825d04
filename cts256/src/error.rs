//! Error types for rule compilation, translation and encoding.

use thiserror::Error;

/// Errors raised while building a rule table or translating text with it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contains a character that has no rule section.
    #[error("no rule section for {character:?} at position {position}")]
    NoRuleForCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// No rule of the section accepted the surrounding context.
    #[error("no rule for {character:?} matches its context at position {position}")]
    NoMatchingContext {
        /// The character whose section was exhausted.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// An allophone name is not part of the SP0256-AL2 inventory.
    #[error("unknown allophone {0:?}")]
    UnknownAllophone(String),
    /// The rule table itself is malformed.
    #[error("invalid rule configuration: {0}")]
    InvalidRuleConfiguration(String),
    /// A rule table file could not be read.
    #[error("failed to read rule table: {0}")]
    Io(String),
    /// A rule table file is not valid JSON for [`RuleTableConfig`](crate::RuleTableConfig).
    #[error("failed to parse rule table JSON: {0}")]
    Json(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Result type for rule table and translation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rule_display() {
        let err = Error::NoRuleForCharacter {
            character: 'a',
            position: 3,
        };
        assert_eq!(err.to_string(), "no rule section for 'a' at position 3");
    }

    #[test]
    fn unknown_allophone_display() {
        let err = Error::UnknownAllophone("XX9".to_string());
        assert_eq!(err.to_string(), "unknown allophone \"XX9\"");
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert_eq!(err, Error::Io("gone".to_string()));
    }
}
