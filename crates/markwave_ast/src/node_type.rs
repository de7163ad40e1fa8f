//! Node tags.
//!
//! Group nodes carry a [`Modifier`], inserter nodes carry an [`Inserter`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Style tag of a group node.
///
/// `None` is the transparent tag used for top-level concatenation. Every
/// other variant names a style applied to the group's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    None,
    Italic,
    Bold,
    Underline,
    FontVariant,
    Primary,
    Secondary,
    Warn,
    Positive,
    Negative,
}

impl Modifier {
    /// All modifiers, transparent one first.
    pub const ALL: [Modifier; 10] = [
        Modifier::None,
        Modifier::Italic,
        Modifier::Bold,
        Modifier::Underline,
        Modifier::FontVariant,
        Modifier::Primary,
        Modifier::Secondary,
        Modifier::Warn,
        Modifier::Positive,
        Modifier::Negative,
    ];

    /// Returns true for the `none` tag, whose group contributes no styling.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Modifier::None)
    }

    /// Returns the kebab-case name of this modifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Modifier::None => "none",
            Modifier::Italic => "italic",
            Modifier::Bold => "bold",
            Modifier::Underline => "underline",
            Modifier::FontVariant => "font-variant",
            Modifier::Primary => "primary",
            Modifier::Secondary => "secondary",
            Modifier::Warn => "warn",
            Modifier::Positive => "positive",
            Modifier::Negative => "negative",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of an atomic, childless node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Inserter {
    BrandMark,
    LineBreak,
}

impl Inserter {
    /// Returns the kebab-case name of this inserter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Inserter::BrandMark => "brand-mark",
            Inserter::LineBreak => "line-break",
        }
    }
}

impl fmt::Display for Inserter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
