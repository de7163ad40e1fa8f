//! Visitor pattern for AST traversal.
//!
//! This module provides a read-only traversal trait and the functions that
//! drive it.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for shape-specific visitors
//! - [`walk_children`] - Traverse all children of a group
//!
//! # Examples
//!
//! ## Collecting Text Content
//!
//! ```rust
//! use markwave_ast::{Modifier, Node};
//! use markwave_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_text(&mut self, value: &'a str) -> VisitResult {
//!         self.texts.push(value);
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let doc = Node::root(vec![
//!     Node::text("hello "),
//!     Node::group(Modifier::Bold, vec![Node::text("world")]),
//! ]);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! let _ = walk_node(&mut collector, &doc);
//! assert_eq!(collector.texts, vec!["hello ", "world"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};
