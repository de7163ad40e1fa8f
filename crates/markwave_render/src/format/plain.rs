use crate::PresentationUnit;

use super::BRAND_NAME;

/// Flattens units into plain text.
///
/// Line breaks become `\n` and the brand mark becomes [`BRAND_NAME`].
pub fn to_plain_text(units: &[PresentationUnit]) -> String {
    let mut output = String::new();
    write_units(&mut output, units);
    output
}

fn write_units(output: &mut String, units: &[PresentationUnit]) {
    for unit in units {
        match unit {
            PresentationUnit::Text { value } => output.push_str(value),
            PresentationUnit::Break => output.push('\n'),
            PresentationUnit::Brand => output.push_str(BRAND_NAME),
            PresentationUnit::Styled { children, .. } => write_units(output, children),
        }
    }
}
