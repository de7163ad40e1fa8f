//! Output formatters.
//!
//! - [`to_plain_text`] - Strips styling, keeps text and line breaks
//! - [`to_html`] - Minimal HTML fragment
//! - [`to_tree`] - Indented AST dump for debugging

mod html;
mod plain;
mod tree;

pub use html::to_html;
pub use plain::to_plain_text;
pub use tree::to_tree;

/// Text standing in for the brand mark in text-only targets.
pub const BRAND_NAME: &str = "helpwave";
