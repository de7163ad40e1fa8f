//! Traversal drivers.

use crate::Node;

use super::visit::{VisitResult, Visitor};

/// Dispatches `node` to the visitor method for its shape.
pub fn walk_node<'a, V>(visitor: &mut V, node: &'a Node) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    match node {
        Node::Group(group) => visitor.visit_group(group),
        Node::Inserter(inserter) => visitor.visit_inserter(*inserter),
        Node::Text(value) => visitor.visit_text(value),
    }
}

/// Visits each child in order, stopping at the first `Break`.
pub fn walk_children<'a, V>(visitor: &mut V, children: &'a [Node]) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    for child in children {
        visitor.visit_node(child)?;
    }
    std::ops::ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;
    use crate::{Group, Inserter, Modifier};

    #[derive(Default)]
    struct Counter {
        groups: usize,
        inserters: usize,
        texts: usize,
    }

    impl<'a> Visitor<'a> for Counter {
        fn visit_group(&mut self, group: &'a Group) -> VisitResult {
            self.groups += 1;
            walk_children(self, &group.children)
        }

        fn visit_inserter(&mut self, _inserter: Inserter) -> VisitResult {
            self.inserters += 1;
            ControlFlow::Continue(())
        }

        fn visit_text(&mut self, _value: &'a str) -> VisitResult {
            self.texts += 1;
            ControlFlow::Continue(())
        }
    }

    fn sample() -> Node {
        Node::root(vec![
            Node::inserter(Inserter::BrandMark),
            Node::text(" "),
            Node::group(
                Modifier::Bold,
                vec![Node::group(Modifier::Italic, vec![Node::text("x")])],
            ),
            Node::inserter(Inserter::LineBreak),
        ])
    }

    #[test]
    fn test_walk_visits_every_node() {
        let doc = sample();
        let mut counter = Counter::default();

        let flow = walk_node(&mut counter, &doc);

        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(counter.groups, 3);
        assert_eq!(counter.inserters, 2);
        assert_eq!(counter.texts, 2);
    }

    struct FirstInserter {
        found: Option<Inserter>,
        texts_seen: usize,
    }

    impl<'a> Visitor<'a> for FirstInserter {
        fn visit_inserter(&mut self, inserter: Inserter) -> VisitResult {
            self.found = Some(inserter);
            ControlFlow::Break(())
        }

        fn visit_text(&mut self, _value: &'a str) -> VisitResult {
            self.texts_seen += 1;
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_break_stops_traversal() {
        let doc = sample();
        let mut finder = FirstInserter {
            found: None,
            texts_seen: 0,
        };

        let flow = walk_node(&mut finder, &doc);

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(finder.found, Some(Inserter::BrandMark));
        assert_eq!(finder.texts_seen, 0);
    }
}
