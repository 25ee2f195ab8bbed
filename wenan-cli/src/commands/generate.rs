//! Generate command implementation

use super::{init_logging, resolve_format, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::read_corpus;
use crate::output::open_writer;
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use wenan_core::{CopyGenerator, GeneratedCopy, TemplateLibrary};

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template corpus file (one paragraph per line)
    #[arg(short, long, value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Product name merged into the template
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Product description; selling points are mined from it
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub desc: String,

    /// Reuse a specific template (index reported by a previous run)
    #[arg(short, long, value_name = "INDEX")]
    pub template_index: Option<usize>,

    /// Seed for reproducible template selection
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

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

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let corpus_path = self
            .corpus
            .clone()
            .or_else(|| config.corpus.path.clone())
            .ok_or_else(|| {
                CliError::ConfigError(
                    "corpus file required (--corpus or [corpus] path in config)".to_string(),
                )
            })?;

        log::info!("Loading template corpus from {}", corpus_path.display());
        let paragraphs = read_corpus(&corpus_path)?;
        let library = TemplateLibrary::from_paragraphs(paragraphs);
        for (category, count) in library.category_counts() {
            log::info!("{}: {} templates", category.label(), count);
        }

        let generator = CopyGenerator::new(library)?;
        let copy = match self.seed {
            Some(seed) => generator.generate_with_rng(
                &self.name,
                &self.desc,
                self.template_index,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => generator.generate(&self.name, &self.desc, self.template_index),
        };
        let copy = copy.ok_or(CliError::NoTemplate)?;

        log::info!(
            "Category {}, template {}/{}",
            copy.category.code(),
            copy.template_index + 1,
            copy.total_templates
        );

        let format = resolve_format(self.format, &config)?;
        let mut writer = open_writer(self.output.as_deref())?;
        render(&copy, format, config.output.pretty_json, &mut writer)?;
        Ok(())
    }
}

fn render(
    copy: &GeneratedCopy,
    format: OutputFormat,
    pretty: bool,
    writer: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", copy.content).context("Failed to write output")?;
        }
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *writer, copy)?;
            } else {
                serde_json::to_writer(&mut *writer, copy)?;
            }
            writeln!(writer).context("Failed to write output")?;
        }
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}
