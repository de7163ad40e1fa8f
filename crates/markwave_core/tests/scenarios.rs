//! End-to-end scenarios through the public entry point.

use markwave_core::{Markup, MarkupConfig, Modifier, PresentationUnit, render_markup};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn text(value: &str) -> PresentationUnit {
    PresentationUnit::text(value)
}

fn styled(style: Modifier, children: Vec<PresentationUnit>) -> PresentationUnit {
    PresentationUnit::styled(style, children)
}

#[test]
fn renders_the_showcase_string() {
    let units = render_markup("\\helpwave \\i{italic} \\{Escape\\} \\\\ \\b{bold}");

    assert_eq!(
        units,
        vec![
            PresentationUnit::Brand,
            text(" "),
            styled(Modifier::Italic, vec![text("italic")]),
            text(" {Escape} \\ "),
            styled(Modifier::Bold, vec![text("bold")]),
        ]
    );
}

#[rstest]
#[case::escaped_backslash("\\\\", vec![text("\\")])]
#[case::escaped_open("\\{", vec![text("{")])]
#[case::escaped_close("\\}", vec![text("}")])]
#[case::brand_only("\\helpwave", vec![PresentationUnit::Brand])]
#[case::line_break("a\\newlineb", vec![text("a"), PresentationUnit::Break, text("b")])]
#[case::unknown_modifier("\\unknown{x}", vec![text("\\unknown{x}")])]
#[case::unknown_command("\\q", vec![text("q")])]
#[case::unterminated("\\i{open", vec![text("\\i{open")])]
#[case::empty("", vec![])]
#[case::empty_style("\\secondary{}", vec![])]
fn renders(#[case] input: &str, #[case] expected: Vec<PresentationUnit>) {
    assert_eq!(render_markup(input), expected);
}

#[rstest]
#[case::spaces("   ")]
#[case::tabs_and_spaces(" \t ")]
#[case::newlines("\n\r\n")]
fn blank_input_renders_nothing(#[case] input: &str) {
    assert!(render_markup(input).is_empty());
}

#[test]
fn whitespace_between_commands_survives() {
    assert_eq!(
        render_markup("  \\helpwave  "),
        vec![text("  "), PresentationUnit::Brand, text("  ")]
    );
}

#[test]
fn styles_nest_and_mix() {
    let units = render_markup("\\space{\\negative{-1}, \\positive{+1}}");

    assert_eq!(
        units,
        vec![styled(
            Modifier::FontVariant,
            vec![
                styled(Modifier::Negative, vec![text("-1")]),
                text(", "),
                styled(Modifier::Positive, vec![text("+1")]),
            ]
        )]
    );
}

#[test]
fn depth_cap_from_config() {
    let config = MarkupConfig::from_json(r#"{ "maxDepth": 2 }"#).unwrap();
    let markup = Markup::new(&config).unwrap();

    let units = markup.render("\\b{\\i{\\u{x}}}");

    assert_eq!(
        units,
        vec![styled(
            Modifier::Bold,
            vec![styled(Modifier::Italic, vec![text("\\u{x}")])]
        )]
    );
}

#[test]
fn hostile_nesting_does_not_exhaust_the_stack() {
    let depth = 100_000;
    let input = format!("{}x{}", "\\b{".repeat(depth), "}".repeat(depth));

    let units = render_markup(&input);

    let mut levels = 0;
    let mut current = &units;
    while let [PresentationUnit::Styled { children, .. }] = current.as_slice() {
        levels += 1;
        current = children;
    }
    assert_eq!(levels, MarkupConfig::new().max_depth);
}
