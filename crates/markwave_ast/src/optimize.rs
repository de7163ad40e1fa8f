//! Tree optimizer.
//!
//! Rewrites a raw parse tree into its canonical form:
//!
//! - empty text nodes are dropped
//! - groups left without children are dropped
//! - `none` groups nested in another group are spliced into their parent
//! - consecutive text siblings are merged into one text node
//!
//! The rewrite is a pure bottom-up rebuild. Returning `None` means the node
//! disappears and the parent leaves it out of its rebuilt child list.

use crate::{Group, Node};

/// Optimizes a node, returning `None` if it carries no content.
///
/// Idempotent: optimizing an already optimized tree returns an equal tree.
pub fn optimize(node: Node) -> Option<Node> {
    match node {
        Node::Text(value) if value.is_empty() => None,
        Node::Text(value) => Some(Node::Text(value)),
        Node::Inserter(inserter) => Some(Node::Inserter(inserter)),
        Node::Group(Group { modifier, children }) => {
            let mut flattened = Vec::with_capacity(children.len());
            for child in children.into_iter().filter_map(optimize) {
                match child {
                    Node::Group(group) if group.modifier.is_transparent() => {
                        flattened.extend(group.children);
                    }
                    other => flattened.push(other),
                }
            }

            if flattened.is_empty() {
                return None;
            }

            Some(Node::group(modifier, merge_text_runs(flattened)))
        }
    }
}

/// Optimizes a document root.
///
/// A root that optimizes away becomes an empty `none` group, the empty
/// document.
pub fn optimize_document(root: Node) -> Node {
    optimize(root).unwrap_or_else(|| Node::root(Vec::new()))
}

/// Returns true if `root` satisfies every invariant [`optimize`] establishes.
///
/// An empty `none` group is accepted at the root, as produced by
/// [`optimize_document`] for empty input.
pub fn is_optimized(root: &Node) -> bool {
    match root {
        Node::Group(group) if group.modifier.is_transparent() && group.children.is_empty() => true,
        node => is_canonical(node),
    }
}

fn is_canonical(node: &Node) -> bool {
    match node {
        Node::Text(value) => !value.is_empty(),
        Node::Inserter(_) => true,
        Node::Group(group) => {
            if group.children.is_empty() {
                return false;
            }
            if group.children.iter().any(Node::is_transparent_group) {
                return false;
            }
            if group
                .children
                .windows(2)
                .any(|pair| pair[0].is_text() && pair[1].is_text())
            {
                return false;
            }
            group.children.iter().all(is_canonical)
        }
    }
}

fn merge_text_runs(children: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());

    for child in children {
        if let Node::Text(value) = &child {
            if let Some(Node::Text(run)) = merged.last_mut() {
                run.push_str(value);
                continue;
            }
        }
        merged.push(child);
    }

    merged
}
