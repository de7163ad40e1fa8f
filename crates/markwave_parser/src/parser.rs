//! Recursive-descent markup parser.
//!
//! The scanner looks for the next command prefix. Text before it becomes a
//! text node; the command after it is resolved by a fixed priority chain:
//! escape, then inserter, then modifier, then unknown character. Modifier
//! arguments are located by bracket counting and parsed recursively.

use markwave_ast::{Modifier, Node};
use tracing::debug;

use crate::tables::{INSERTERS, MODIFIERS, lookup};
use crate::{Delimiters, ParseOptions, Scanner};

/// Parses `input` with the default delimiters.
///
/// Returns the raw tree: a `none` group that may still contain empty text
/// nodes and nested `none` groups. Run it through
/// [`markwave_ast::optimize`] before rendering.
pub fn parse(input: &str) -> Node {
    MarkupParser::default().parse(input)
}

/// Markup parser with configurable delimiters and nesting cap.
#[derive(Debug, Clone, Default)]
pub struct MarkupParser {
    options: ParseOptions,
}

impl MarkupParser {
    /// Creates a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses `input` into a raw `none` group. Never fails.
    pub fn parse(&self, input: &str) -> Node {
        self.parse_at_depth(input, 0)
    }

    fn parse_at_depth(&self, input: &str, depth: usize) -> Node {
        let prefix = self.options.delimiters.command_prefix();
        let mut scanner = Scanner::new(input);
        let mut children = Vec::new();

        loop {
            let Some(offset) = scanner.find(prefix) else {
                children.push(Node::text(scanner.take_rest()));
                break;
            };

            children.push(Node::text(scanner.take(offset)));
            scanner.advance();
            self.parse_command(&mut scanner, depth, &mut children);
        }

        Node::root(children)
    }

    /// Resolves the command following a consumed command prefix.
    fn parse_command(&self, scanner: &mut Scanner<'_>, depth: usize, children: &mut Vec<Node>) {
        let delimiters = self.options.delimiters;

        let Some(next) = scanner.peek() else {
            // A trailing prefix has nothing to introduce and stays literal.
            children.push(Node::text(delimiters.command_prefix().to_string()));
            return;
        };

        if delimiters.is_delimiter(next) {
            scanner.advance();
            children.push(Node::text(next.to_string()));
            return;
        }

        if let Some((identifier, inserter)) = lookup(INSERTERS, scanner.rest()) {
            scanner.match_literal(identifier);
            children.push(Node::inserter(inserter));
            return;
        }

        if let Some((identifier, modifier)) = lookup(MODIFIERS, scanner.rest()) {
            self.parse_modifier(scanner, identifier, modifier, depth, children);
            return;
        }

        scanner.advance();
        children.push(Node::text(next.to_string()));
    }

    fn parse_modifier(
        &self,
        scanner: &mut Scanner<'_>,
        identifier: &str,
        modifier: Modifier,
        depth: usize,
        children: &mut Vec<Node>,
    ) {
        let delimiters = self.options.delimiters;
        let command_start = scanner.position();
        scanner.match_literal(identifier);

        let literal = || Node::text(format!("{}{identifier}", delimiters.command_prefix()));

        if scanner.peek() != Some(delimiters.open()) {
            children.push(literal());
            return;
        }

        if depth >= self.options.max_depth {
            debug!(
                depth,
                max_depth = self.options.max_depth,
                "modifier nesting limit reached, keeping `{identifier}` as text"
            );
            children.push(literal());
            return;
        }

        scanner.advance();
        let Some(len) = matching_close(scanner.rest(), &delimiters) else {
            // Unterminated argument: emit the prefix alone and rescan what
            // follows it as ordinary markup.
            scanner.reset(command_start);
            children.push(Node::text(delimiters.command_prefix().to_string()));
            return;
        };

        let argument = scanner.take(len);
        scanner.advance();
        children.push(Node::group(
            modifier,
            vec![self.parse_at_depth(argument, depth + 1)],
        ));
    }
}

/// Byte length of a modifier argument, up to its matching close bracket.
///
/// `source` starts right after the open bracket. The bracket counter starts
/// at one; a bracket immediately preceded by the command prefix leaves it
/// untouched.
fn matching_close(source: &str, delimiters: &Delimiters) -> Option<usize> {
    let mut depth = 1usize;
    let mut previous = None;

    for (index, c) in source.char_indices() {
        if previous != Some(delimiters.command_prefix()) {
            if c == delimiters.open() {
                depth += 1;
            } else if c == delimiters.close() {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
        }
        previous = Some(c);
    }

    None
}
