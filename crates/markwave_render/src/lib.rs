//! # markwave_render
//!
//! Turns an optimized markup AST into presentation units.
//!
//! A [`PresentationUnit`] is what the UI layer consumes: text runs, line
//! breaks, the brand mark, and styled wrappers that mirror the group
//! structure of the tree. How those units look on screen is up to the
//! consumer; the [`format`] module ships three simple targets (plain text,
//! HTML and a debug tree dump).
//!
//! ## Example
//!
//! ```rust
//! use markwave_ast::{Modifier, optimize_document};
//! use markwave_parser::parse;
//! use markwave_render::{PresentationUnit, render};
//!
//! let doc = optimize_document(parse("\\i{hi}\\newline"));
//!
//! assert_eq!(
//!     render(&doc),
//!     vec![
//!         PresentationUnit::styled(Modifier::Italic, vec![PresentationUnit::text("hi")]),
//!         PresentationUnit::Break,
//!     ]
//! );
//! ```

pub mod format;
mod renderer;
mod unit;

pub use format::{BRAND_NAME, to_html, to_plain_text, to_tree};
pub use renderer::{Renderer, render};
pub use unit::PresentationUnit;
