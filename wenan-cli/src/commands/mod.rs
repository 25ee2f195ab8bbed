//! CLI command implementations

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use clap::Subcommand;
use wenan_core::Category;

pub mod generate;
pub mod generate_config;
pub mod split;
pub mod stats;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate marketing copy for a product from a template corpus
    Generate(generate::GenerateArgs),

    /// Split text into synthesis-sized segments
    Split(split::SplitArgs),

    /// Show per-category template counts for a corpus
    Stats(stats::StatsArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List style categories and their corpus keywords
    Categories,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Generate(args) => args.execute(),
            Commands::Split(args) => args.execute(),
            Commands::Stats(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Categories => {
                for category in Category::ALL {
                    let keywords = category.partition_keywords();
                    if keywords.is_empty() {
                        println!("{} ({}) - catch-all", category.code(), category.label());
                    } else {
                        println!(
                            "{} ({}) - keywords: {}",
                            category.code(),
                            category.label(),
                            keywords.join(", ")
                        );
                    }
                }
            }
            ListCommands::Formats => {
                println!("text - plain text, one item per line");
                println!("json - JSON with selection and length metadata");
            }
        }
        Ok(())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Text,
    /// Machine-readable JSON
    Json,
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Resolve the output format: explicit flag first, then the config default
pub(crate) fn resolve_format(
    flag: Option<OutputFormat>,
    config: &CliConfig,
) -> CliResult<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    <OutputFormat as clap::ValueEnum>::from_str(&config.output.default_format, true).map_err(
        |_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        },
    )
}
