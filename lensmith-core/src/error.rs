//! Error types for the parser and the generator configuration.
//!
//! The generation pipeline itself never returns an error. Only reading
//! source text and validating a [`GeneratorConfig`](crate::GeneratorConfig)
//! can fail.

use thiserror::Error;

/// An error raised while reading Swift-like declaration text.
///
/// Offsets are byte offsets into the source passed to the parser.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{ParseError, parse_declaration};
///
/// let error = parse_declaration("import Foundation").unwrap_err();
/// assert_eq!(error, ParseError::NoDeclaration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source contains no type declaration.
    #[error("no type declaration found")]
    NoDeclaration,
    /// The source ended inside a construct.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEnd {
        /// What the parser was reading.
        context: &'static str,
    },
    /// A string literal was never closed.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString {
        /// Offset of the opening quote.
        offset: usize,
    },
    /// A block comment was never closed.
    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment {
        /// Offset of the opening `/*`.
        offset: usize,
    },
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected `{found}` at byte {offset}, expected {expected}")]
    Unexpected {
        /// The offending token text.
        found: String,
        /// What the parser expected.
        expected: &'static str,
        /// Offset of the offending token.
        offset: usize,
    },
}

/// An error raised by [`GeneratorConfig::validate`](crate::GeneratorConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting that must be an identifier is empty or contains other characters.
    #[error("`{setting}` must be an identifier, got {value:?}")]
    InvalidIdentifier {
        /// The setting name.
        setting: &'static str,
        /// The rejected value.
        value: String,
    },
    /// The setter's two parameters would shadow each other.
    #[error("value and instance parameters are both named `{name}`")]
    ParameterClash {
        /// The shared name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::Unexpected {
            found: "}".to_string(),
            expected: "a type name",
            offset: 12,
        };
        assert_eq!(
            error.to_string(),
            "unexpected `}` at byte 12, expected a type name"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::ParameterClash {
            name: "whole".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "value and instance parameters are both named `whole`"
        );
    }
}
