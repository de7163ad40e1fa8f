use std::fmt::Write;

use markwave_ast::Node;

/// Dumps an AST as an indented tree, one node per line.
///
/// ```text
/// group none
///   inserter brand-mark
///   group italic
///     text "x"
/// ```
pub fn to_tree(node: &Node) -> String {
    let mut output = String::new();
    write_node(&mut output, node, 0);
    output
}

fn write_node(output: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    // Writing to a String cannot fail.
    let _ = match node {
        Node::Group(group) => writeln!(output, "{indent}group {}", group.modifier),
        Node::Inserter(inserter) => writeln!(output, "{indent}inserter {inserter}"),
        Node::Text(value) => writeln!(output, "{indent}text {value:?}"),
    };

    if let Node::Group(group) = node {
        for child in &group.children {
            write_node(output, child, depth + 1);
        }
    }
}
