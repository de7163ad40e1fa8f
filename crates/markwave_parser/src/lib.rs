//! # markwave_parser
//!
//! Parser for the markwave inline markup language.
//!
//! This crate provides:
//! - A [`Scanner`] owning the cursor into the source string
//! - Identifier tables for inserters and modifiers
//! - The recursive-descent [`MarkupParser`]
//!
//! ## Grammar
//!
//! With the default delimiters:
//!
//! - `\\`, `\{`, `\}` escape a literal character
//! - `\helpwave` and `\newline` insert a brand mark and a line break
//! - `\i{…}`, `\b{…}`, `\u{…}`, `\space{…}`, `\primary{…}`, `\secondary{…}`,
//!   `\warn{…}`, `\positive{…}`, `\negative{…}` style their argument
//! - everything else is literal text
//!
//! Parsing is total: malformed markup degrades to literal text.
//!
//! ## Example
//!
//! ```rust
//! use markwave_ast::{Modifier, Node, optimize};
//! use markwave_parser::parse;
//!
//! let ast = optimize(parse("\\b{bold}")).unwrap();
//!
//! assert_eq!(
//!     ast,
//!     Node::root(vec![Node::group(Modifier::Bold, vec![Node::text("bold")])])
//! );
//! ```

mod error;
mod options;
mod parser;
mod scanner;
mod tables;

pub use error::ParseError;
pub use options::{DEFAULT_MAX_DEPTH, Delimiters, ParseOptions};
pub use parser::{MarkupParser, parse};
pub use scanner::Scanner;
pub use tables::{INSERTERS, MODIFIERS, lookup};
