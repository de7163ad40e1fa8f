//! Markup pipeline: parse, optimize, render.

use markwave_ast::{Node, optimize_document};
use markwave_parser::MarkupParser;
use markwave_render::{PresentationUnit, render};
use tracing::debug;

use crate::{MarkupConfig, MarkupError};

/// Renders `input` with the default delimiters.
///
/// This never fails: malformed markup degrades to literal text and blank
/// input yields no units.
pub fn render_markup(input: &str) -> Vec<PresentationUnit> {
    Markup::default().render(input)
}

/// Renders `input` with the delimiters and depth cap from `config`.
pub fn render_markup_with(
    input: &str,
    config: &MarkupConfig,
) -> Result<Vec<PresentationUnit>, MarkupError> {
    Ok(Markup::new(config)?.render(input))
}

/// A configured markup pipeline.
///
/// Holds no state between calls; every call builds a fresh tree.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    parser: MarkupParser,
}

impl Markup {
    /// Creates a pipeline from a configuration.
    pub fn new(config: &MarkupConfig) -> Result<Self, MarkupError> {
        let options = config.parser_options()?;
        Ok(Self {
            parser: MarkupParser::new(options),
        })
    }

    /// Parses `input` into the raw, unoptimized tree.
    pub fn parse(&self, input: &str) -> Node {
        debug!(len = input.len(), "parsing markup");
        self.parser.parse(input)
    }

    /// Parses and optimizes `input`.
    ///
    /// Blank input (empty or whitespace only) yields the empty document.
    /// Whitespace inside a non-blank document is kept as text.
    pub fn parse_optimized(&self, input: &str) -> Node {
        if input.trim().is_empty() {
            return Node::root(vec![]);
        }

        let document = optimize_document(self.parse(input));
        debug_assert!(markwave_ast::is_optimized(&document));
        document
    }

    /// Parses, optimizes and renders `input`.
    pub fn render(&self, input: &str) -> Vec<PresentationUnit> {
        let units = render(&self.parse_optimized(input));
        debug!(units = units.len(), "rendered markup");
        units
    }
}
