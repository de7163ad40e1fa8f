//! Identifier tables.
//!
//! Identifiers are matched by exact prefix against these ordered tables.
//! The first entry that matches wins; there is no longest-match rule.

use markwave_ast::{Inserter, Modifier};

/// Bracket-free identifiers that expand to an atomic node.
pub const INSERTERS: &[(&str, Inserter)] = &[
    ("helpwave", Inserter::BrandMark),
    ("newline", Inserter::LineBreak),
];

/// Identifiers that take one bracketed argument.
pub const MODIFIERS: &[(&str, Modifier)] = &[
    ("i", Modifier::Italic),
    ("b", Modifier::Bold),
    ("u", Modifier::Underline),
    ("space", Modifier::FontVariant),
    ("primary", Modifier::Primary),
    ("secondary", Modifier::Secondary),
    ("warn", Modifier::Warn),
    ("positive", Modifier::Positive),
    ("negative", Modifier::Negative),
];

/// Returns the first table entry whose identifier prefixes `input`.
pub fn lookup<T: Copy>(table: &[(&'static str, T)], input: &str) -> Option<(&'static str, T)> {
    table
        .iter()
        .find(|(identifier, _)| input.starts_with(identifier))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("helpwave and more", Some(("helpwave", Inserter::BrandMark)))]
    #[case("newlineb", Some(("newline", Inserter::LineBreak)))]
    #[case("help", None)]
    #[case("", None)]
    fn test_lookup_inserters(#[case] input: &str, #[case] expected: Option<(&str, Inserter)>) {
        assert_eq!(lookup(INSERTERS, input), expected);
    }

    #[rstest]
    #[case("i{x}", Some(("i", Modifier::Italic)))]
    #[case("italic{x}", Some(("i", Modifier::Italic)))]
    #[case("unknown", Some(("u", Modifier::Underline)))]
    #[case("space{x}", Some(("space", Modifier::FontVariant)))]
    #[case("secondary{x}", Some(("secondary", Modifier::Secondary)))]
    #[case("negative{x}", Some(("negative", Modifier::Negative)))]
    #[case("x{y}", None)]
    fn test_lookup_modifiers(#[case] input: &str, #[case] expected: Option<(&str, Modifier)>) {
        assert_eq!(lookup(MODIFIERS, input), expected);
    }

    #[test]
    fn test_every_styled_modifier_has_an_identifier() {
        for modifier in Modifier::ALL.iter().filter(|m| !m.is_transparent()) {
            assert!(
                MODIFIERS.iter().any(|(_, m)| m == modifier),
                "no identifier for {modifier}"
            );
        }
    }

    #[test]
    fn test_identifiers_are_alphabetic() {
        let identifiers = INSERTERS
            .iter()
            .map(|(id, _)| *id)
            .chain(MODIFIERS.iter().map(|(id, _)| *id));
        for identifier in identifiers {
            assert!(identifier.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }
}
