//! Read-only visitor trait.

use std::ops::ControlFlow;

use crate::{Group, Inserter, Node};

use super::walk::{walk_children, walk_node};

/// Result of a visit. `Break` stops the traversal.
pub type VisitResult = ControlFlow<()>;

/// Read-only AST visitor.
///
/// Every method has a default that keeps walking, so implementors only
/// override the shapes they care about. Overriding [`Visitor::visit_group`]
/// takes over the traversal of that group's children.
pub trait Visitor<'a> {
    /// Called for every node before shape dispatch.
    fn visit_node(&mut self, node: &'a Node) -> VisitResult {
        walk_node(self, node)
    }

    /// Called for group nodes, transparent ones included.
    fn visit_group(&mut self, group: &'a Group) -> VisitResult {
        walk_children(self, &group.children)
    }

    /// Called for inserter nodes.
    fn visit_inserter(&mut self, _inserter: Inserter) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for text nodes.
    fn visit_text(&mut self, _value: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }
}
