//! Presentation unit definition.

use markwave_ast::Modifier;
use serde::{Deserialize, Serialize};

/// A typed, ordered piece of rendered content.
///
/// Serialized with a `kind` tag, e.g. `{"kind":"text","value":"hi"}` or
/// `{"kind":"styled","style":"bold","children":[…]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PresentationUnit {
    /// A run of literal text.
    Text { value: String },

    /// A line break.
    Break,

    /// The brand mark.
    Brand,

    /// A style wrapping mixed content.
    Styled {
        style: Modifier,
        children: Vec<PresentationUnit>,
    },
}

impl PresentationUnit {
    /// Creates a text unit.
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Creates a styled unit.
    #[inline]
    pub const fn styled(style: Modifier, children: Vec<PresentationUnit>) -> Self {
        Self::Styled { style, children }
    }
}
