//! Markup error types.

use markwave_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while setting up the markup pipeline.
///
/// Rendering itself never fails; these only come from configuration.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured delimiters were rejected by the parser.
    #[error("Invalid delimiters: {0}")]
    Delimiters(#[from] ParseError),
}

impl MarkupError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
