//! Markup configuration.

use std::fs;
use std::path::{Path, PathBuf};

use markwave_parser::{DEFAULT_MAX_DEPTH, Delimiters, ParseOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::MarkupError;

/// Contents written by `markwave init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"{
  // Character introducing escapes, inserters and modifiers.
  "commandPrefix": "\\",
  // Brackets around modifier arguments.
  "open": "{",
  "close": "}",
  // Modifiers nested deeper than this are kept as literal text.
  "maxDepth": 64
}
"#;

/// Configuration for the markup pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MarkupConfig {
    /// Character introducing escapes, inserters and modifiers.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: char,

    /// Character opening a modifier argument.
    #[serde(default = "default_open")]
    pub open: char,

    /// Character closing a modifier argument.
    #[serde(default = "default_close")]
    pub close: char,

    /// Maximum nesting of modifier arguments.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_command_prefix() -> char {
    '\\'
}

fn default_open() -> char {
    '{'
}

fn default_close() -> char {
    '}'
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl MarkupConfig {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: [&str; 2] = [".markwave.jsonc", ".markwave.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            open: default_open(),
            close: default_close(),
            max_depth: default_max_depth(),
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MarkupError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MarkupError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loaded markup config");
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string. Comments and trailing commas
    /// are accepted.
    pub fn from_json(json: &str) -> Result<Self, MarkupError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| MarkupError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let config: Self = serde_json::from_value(value)
            .map_err(|e| MarkupError::config(format!("Invalid config: {}", e)))?;

        config.parser_options()?;
        Ok(config)
    }

    /// Returns the first configuration file present in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }

    /// Converts this configuration into validated parser options.
    pub fn parser_options(&self) -> Result<ParseOptions, MarkupError> {
        let delimiters = Delimiters::new(self.command_prefix, self.open, self.close)?;
        Ok(ParseOptions::new(delimiters).with_max_depth(self.max_depth))
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self::new()
    }
}
