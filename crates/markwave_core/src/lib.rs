//! # markwave_core
//!
//! Pipeline entry point for markwave markup.
//!
//! This crate provides:
//! - The [`Markup`] engine: parse, optimize, render
//! - Configuration loading from `.markwave.jsonc` / `.markwave.json`
//! - [`render_markup`], the single function the UI layer calls
//!
//! ## Example
//!
//! ```rust
//! use markwave_core::{PresentationUnit, render_markup};
//!
//! let units = render_markup("a\\newlineb");
//!
//! assert_eq!(
//!     units,
//!     vec![
//!         PresentationUnit::text("a"),
//!         PresentationUnit::Break,
//!         PresentationUnit::text("b"),
//!     ]
//! );
//! ```

mod config;
mod error;
mod markup;

pub use config::{DEFAULT_CONFIG_TEMPLATE, MarkupConfig};
pub use error::MarkupError;
pub use markup::{Markup, render_markup, render_markup_with};

pub use markwave_ast::{Inserter, Modifier, Node};
pub use markwave_render::PresentationUnit;
