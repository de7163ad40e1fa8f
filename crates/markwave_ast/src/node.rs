//! Node definition.
//!
//! The core AST node type shared by the parser, optimizer and renderer.

use serde::Serialize;

use crate::{Inserter, Modifier};

/// A node in the markup AST.
///
/// Every parent exclusively owns its children, so a tree is finite, acyclic
/// and its depth follows the bracket nesting of the source string.
///
/// # Example
///
/// ```rust
/// use markwave_ast::{Inserter, Modifier, Node};
///
/// let bold = Node::group(Modifier::Bold, vec![Node::text("bold")]);
/// let doc = Node::root(vec![Node::inserter(Inserter::BrandMark), bold]);
///
/// assert_eq!(doc.as_group().map(|g| g.children.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A styled (or transparent) sequence of children.
    Group(Group),

    /// An atomic marker with no children and no payload.
    Inserter(Inserter),

    /// A literal string. May be empty before optimization.
    Text(String),
}

/// Payload of a group node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// The style applied to the children.
    pub modifier: Modifier,

    /// Child nodes, in source order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates a new group.
    #[inline]
    pub const fn new(modifier: Modifier, children: Vec<Node>) -> Self {
        Self { modifier, children }
    }
}

impl Node {
    /// Creates a text node.
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a group node with the given modifier.
    #[inline]
    pub const fn group(modifier: Modifier, children: Vec<Node>) -> Self {
        Self::Group(Group::new(modifier, children))
    }

    /// Creates a transparent (`none`) group node.
    #[inline]
    pub const fn root(children: Vec<Node>) -> Self {
        Self::group(Modifier::None, children)
    }

    /// Creates an inserter node.
    #[inline]
    pub const fn inserter(inserter: Inserter) -> Self {
        Self::Inserter(inserter)
    }

    /// Returns true if this node is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the literal payload of a text node.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the group payload of a group node.
    #[inline]
    pub const fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns true if this node is a `none`-tagged group.
    #[inline]
    pub const fn is_transparent_group(&self) -> bool {
        matches!(self, Self::Group(group) if group.modifier.is_transparent())
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            Node::Group(group) => {
                let mut state = serializer.serialize_struct("Node", 3)?;
                state.serialize_field("type", "group")?;
                state.serialize_field("modifier", &group.modifier)?;
                state.serialize_field("children", &group.children)?;
                state.end()
            }
            Node::Inserter(inserter) => {
                let mut state = serializer.serialize_struct("Node", 2)?;
                state.serialize_field("type", "inserter")?;
                state.serialize_field("kind", inserter)?;
                state.end()
            }
            Node::Text(value) => {
                let mut state = serializer.serialize_struct("Node", 2)?;
                state.serialize_field("type", "text")?;
                state.serialize_field("value", value)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let node = Node::text("hello");

        assert!(node.is_text());
        assert_eq!(node.as_text(), Some("hello"));
        assert!(node.as_group().is_none());
    }

    #[test]
    fn test_root_is_transparent() {
        let node = Node::root(vec![]);

        assert!(node.is_transparent_group());
        assert!(!Node::group(Modifier::Bold, vec![]).is_transparent_group());
        assert!(!Node::text("x").is_transparent_group());
    }

    #[test]
    fn test_nested_groups() {
        let italic = Node::group(Modifier::Italic, vec![Node::text("x")]);
        let bold = Node::group(Modifier::Bold, vec![italic]);

        let outer = bold.as_group().unwrap();
        assert_eq!(outer.modifier, Modifier::Bold);
        let inner = outer.children[0].as_group().unwrap();
        assert_eq!(inner.modifier, Modifier::Italic);
        assert_eq!(inner.children[0].as_text(), Some("x"));
    }

    #[test]
    fn test_serialization_text() {
        let json = serde_json::to_value(Node::text("hello")).unwrap();

        assert_eq!(json["type"], "text");
        assert_eq!(json["value"], "hello");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_serialization_inserter() {
        let json = serde_json::to_value(Node::inserter(Inserter::LineBreak)).unwrap();

        assert_eq!(json["type"], "inserter");
        assert_eq!(json["kind"], "line-break");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_serialization_group() {
        let node = Node::group(Modifier::FontVariant, vec![Node::text("a")]);
        let json = serde_json::to_value(node).unwrap();

        assert_eq!(json["type"], "group");
        assert_eq!(json["modifier"], "font-variant");
        assert_eq!(json["children"][0]["value"], "a");
    }

    #[test]
    fn test_serialization_empty_group_keeps_children() {
        let json = serde_json::to_value(Node::root(vec![])).unwrap();

        assert!(json["children"].as_array().unwrap().is_empty());
    }
}
