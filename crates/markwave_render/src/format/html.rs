use markwave_ast::Modifier;

use crate::PresentationUnit;

use super::BRAND_NAME;

/// Renders units as an HTML fragment.
///
/// Italic, bold and underline map to `<i>`, `<b>` and `<u>`. Every other
/// style becomes a `<span>` whose class is the modifier name.
pub fn to_html(units: &[PresentationUnit]) -> String {
    let mut output = String::new();
    write_units(&mut output, units);
    output
}

fn write_units(output: &mut String, units: &[PresentationUnit]) {
    for unit in units {
        match unit {
            PresentationUnit::Text { value } => escape_into(output, value),
            PresentationUnit::Break => output.push_str("<br>"),
            PresentationUnit::Brand => {
                output.push_str("<span class=\"brand-mark\">");
                output.push_str(BRAND_NAME);
                output.push_str("</span>");
            }
            PresentationUnit::Styled { style, children } => {
                let (open, close) = tags(*style);
                output.push_str(&open);
                write_units(output, children);
                output.push_str(close);
            }
        }
    }
}

fn tags(style: Modifier) -> (String, &'static str) {
    match style {
        Modifier::Italic => ("<i>".to_string(), "</i>"),
        Modifier::Bold => ("<b>".to_string(), "</b>"),
        Modifier::Underline => ("<u>".to_string(), "</u>"),
        other => (format!("<span class=\"{other}\">"), "</span>"),
    }
}

fn escape_into(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Modifier::Italic, "<i>x</i>")]
    #[case(Modifier::Bold, "<b>x</b>")]
    #[case(Modifier::Underline, "<u>x</u>")]
    #[case(Modifier::FontVariant, "<span class=\"font-variant\">x</span>")]
    #[case(Modifier::Negative, "<span class=\"negative\">x</span>")]
    fn test_styles(#[case] style: Modifier, #[case] expected: &str) {
        let units = vec![PresentationUnit::styled(style, vec![PresentationUnit::text("x")])];
        assert_eq!(to_html(&units), expected);
    }

    #[test]
    fn test_text_is_escaped() {
        let units = vec![PresentationUnit::text("<a href=\"x\">Tom & Jerry's</a>")];

        assert_eq!(
            to_html(&units),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_atoms() {
        let units = vec![PresentationUnit::Brand, PresentationUnit::Break];

        assert_eq!(
            to_html(&units),
            "<span class=\"brand-mark\">helpwave</span><br>"
        );
    }
}
