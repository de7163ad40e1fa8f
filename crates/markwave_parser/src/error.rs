//! Parse error types.

use thiserror::Error;

/// Errors that can occur while configuring the parser.
///
/// Parsing itself never fails; every input string has a defined output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Two delimiter roles share the same character.
    #[error("Delimiter '{delimiter}' is used for both {first} and {second}")]
    DuplicateDelimiter {
        /// The shared character.
        delimiter: char,
        /// First role using it.
        first: &'static str,
        /// Second role using it.
        second: &'static str,
    },

    /// A delimiter character that would clash with identifiers or text.
    #[error("Invalid {role} delimiter '{delimiter}': {reason}")]
    InvalidDelimiter {
        /// The delimiter role (command prefix, open or close).
        role: &'static str,
        /// The rejected character.
        delimiter: char,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl ParseError {
    /// Creates a new duplicate delimiter error.
    pub fn duplicate(delimiter: char, first: &'static str, second: &'static str) -> Self {
        Self::DuplicateDelimiter {
            delimiter,
            first,
            second,
        }
    }

    /// Creates a new invalid delimiter error.
    pub fn invalid(role: &'static str, delimiter: char, reason: &'static str) -> Self {
        Self::InvalidDelimiter {
            role,
            delimiter,
            reason,
        }
    }
}
