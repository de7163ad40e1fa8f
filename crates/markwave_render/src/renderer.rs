//! AST to presentation units.

use std::ops::ControlFlow;

use markwave_ast::visitor::{VisitResult, Visitor, walk_children};
use markwave_ast::{Group, Inserter, Node};

use crate::PresentationUnit;

/// Renders an optimized tree into presentation units.
///
/// A `none` group contributes its children's units directly; every other
/// group becomes one [`PresentationUnit::Styled`].
pub fn render(node: &Node) -> Vec<PresentationUnit> {
    Renderer::new().render(node)
}

/// Depth-first visitor collecting presentation units.
///
/// Keeps one frame per open styled group; the bottom frame holds the
/// top-level output.
#[derive(Debug)]
pub struct Renderer {
    frames: Vec<Vec<PresentationUnit>>,
}

impl Renderer {
    /// Creates a renderer with an empty output frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Vec::new()],
        }
    }

    /// Consumes the renderer and returns the units for `node`.
    pub fn render(mut self, node: &Node) -> Vec<PresentationUnit> {
        let _ = self.visit_node(node);
        debug_assert_eq!(self.frames.len(), 1);
        self.frames.pop().unwrap_or_default()
    }

    fn emit(&mut self, unit: PresentationUnit) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(unit);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Visitor<'a> for Renderer {
    fn visit_group(&mut self, group: &'a Group) -> VisitResult {
        if group.modifier.is_transparent() {
            return walk_children(self, &group.children);
        }

        self.frames.push(Vec::new());
        let flow = walk_children(self, &group.children);
        let children = self.frames.pop().unwrap_or_default();
        self.emit(PresentationUnit::styled(group.modifier, children));
        flow
    }

    fn visit_inserter(&mut self, inserter: Inserter) -> VisitResult {
        self.emit(match inserter {
            Inserter::BrandMark => PresentationUnit::Brand,
            Inserter::LineBreak => PresentationUnit::Break,
        });
        ControlFlow::Continue(())
    }

    fn visit_text(&mut self, value: &'a str) -> VisitResult {
        self.emit(PresentationUnit::text(value));
        ControlFlow::Continue(())
    }
}
