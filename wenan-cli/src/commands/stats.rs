//! Stats command implementation

use super::{init_logging, resolve_format, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::read_corpus;
use crate::output::open_writer;
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use wenan_core::TemplateLibrary;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Template corpus file (one paragraph per line)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub corpus: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Per-category count as rendered in JSON output
#[derive(Debug, Serialize)]
struct CategoryCount {
    category: &'static str,
    label: &'static str,
    templates: usize,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let paragraphs = read_corpus(&self.corpus)?;
        let library = TemplateLibrary::from_paragraphs(paragraphs);

        let counts: Vec<CategoryCount> = library
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.code(),
                label: category.label(),
                templates: count,
            })
            .collect();

        let format = resolve_format(self.format, &config)?;
        let mut writer = open_writer(None)?;
        match format {
            OutputFormat::Text => {
                for count in &counts {
                    writeln!(
                        writer,
                        "{} ({}): {}",
                        count.category, count.label, count.templates
                    )
                    .context("Failed to write output")?;
                }
                writeln!(writer, "total: {}", library.len())
                    .context("Failed to write output")?;
            }
            OutputFormat::Json => {
                if config.output.pretty_json {
                    serde_json::to_writer_pretty(&mut writer, &counts)?;
                } else {
                    serde_json::to_writer(&mut writer, &counts)?;
                }
                writeln!(writer).context("Failed to write output")?;
            }
        }
        writer.flush().context("Failed to flush output")?;
        Ok(())
    }
}
