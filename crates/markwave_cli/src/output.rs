//! Output formatting for rendered markup.

use clap::ValueEnum;
use miette::{IntoDiagnostic, Result};

use markwave_core::{Node, PresentationUnit};
use markwave_render::{to_html, to_plain_text, to_tree};

/// Output format of the `render` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Presentation units as pretty-printed JSON
    Json,
    /// Plain text with styling removed
    Text,
    /// HTML fragment
    Html,
}

pub fn print_units(units: &[PresentationUnit], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(units).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", to_plain_text(units)),
        OutputFormat::Html => println!("{}", to_html(units)),
    }
    Ok(())
}

pub fn print_tree(node: &Node) {
    print!("{}", to_tree(node));
}
