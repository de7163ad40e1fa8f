//! # markwave_ast
//!
//! AST definitions for the markwave inline markup language.
//!
//! This crate provides the tree produced by `markwave_parser`, the optimizer
//! that rewrites it into canonical form, and a read-only visitor used by the
//! renderer.
//!
//! ## Architecture
//!
//! - [`Node`] is a sum type with three shapes: group, inserter and text
//! - Parents own their children (`Vec<Node>`), there is no sharing
//! - [`optimize`] rebuilds a tree bottom-up instead of mutating it in place
//!
//! ## Example
//!
//! ```rust
//! use markwave_ast::{Modifier, Node, optimize};
//!
//! let raw = Node::root(vec![
//!     Node::text("Hello, "),
//!     Node::root(vec![Node::text("world")]),
//!     Node::group(Modifier::Bold, vec![Node::text("")]),
//! ]);
//!
//! assert_eq!(optimize(raw), Some(Node::root(vec![Node::text("Hello, world")])));
//! ```

mod node;
mod node_type;
mod optimize;
pub mod visitor;

pub use node::{Group, Node};
pub use node_type::{Inserter, Modifier};
pub use optimize::{is_optimized, optimize, optimize_document};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
