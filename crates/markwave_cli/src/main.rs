//! markwave CLI
//!
//! Renders markwave inline markup from files, arguments or stdin.

mod output;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use markwave_core::{DEFAULT_CONFIG_TEMPLATE, Markup, MarkupConfig};

use crate::output::OutputFormat;

/// markwave - inline markup renderer
#[derive(Parser)]
#[command(name = "markwave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup into presentation units
    Render {
        /// File to read markup from (stdin if omitted)
        file: Option<PathBuf>,

        /// Markup given inline instead of a file
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the syntax tree of the markup
    Tree {
        /// File to read markup from (stdin if omitted)
        file: Option<PathBuf>,

        /// Markup given inline instead of a file
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Show the tree before optimization
        #[arg(long)]
        raw: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Render { file, text, format } => {
            let markup = load_markup(cli.config.as_deref())?;
            let input = read_input(file.as_deref(), text.as_deref())?;
            output::print_units(&markup.render(&input), *format)
        }
        Commands::Tree { file, text, raw } => {
            let markup = load_markup(cli.config.as_deref())?;
            let input = read_input(file.as_deref(), text.as_deref())?;
            let tree = if *raw {
                markup.parse(&input)
            } else {
                markup.parse_optimized(&input)
            };
            output::print_tree(&tree);
            Ok(())
        }
        Commands::Init { force } => run_init(*force),
    }
}

fn load_markup(config_path: Option<&Path>) -> Result<Markup> {
    let config = match config_path {
        Some(path) => MarkupConfig::from_file(path).into_diagnostic()?,
        None => find_config()?,
    };
    Markup::new(&config).into_diagnostic()
}

fn find_config() -> Result<MarkupConfig> {
    if let Some(path) = MarkupConfig::discover(".") {
        info!("Using config: {}", path.display());
        return MarkupConfig::from_file(&path).into_diagnostic();
    }

    Ok(MarkupConfig::new())
}

fn read_input(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()?;
            Ok(input)
        }
    }
}

fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(MarkupConfig::CONFIG_FILES[0]);

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        match options.open(&config_path) {
            Ok(mut file) => {
                use std::io::Write;
                file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())
                    .into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }
                std::fs::remove_file(&config_path).into_diagnostic()?;
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
