//! Split command implementation

use super::{init_logging, resolve_format, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::{open_writer, JsonFormatter, OutputFormatter, TextFormatter};
use clap::Args;
use std::path::PathBuf;
use wenan_core::Segmenter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Literal text to split
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Maximum characters per segment
    #[arg(short, long, value_name = "CHARS")]
    pub max_chars: Option<usize>,

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

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let text = self.read_input()?;
        let max_chars = self.max_chars.unwrap_or(config.segment.max_chars);

        let segmenter = Segmenter::new(max_chars)?;
        let segments = segmenter.split(&text);
        log::info!(
            "Split {} characters into {} segments (ceiling {max_chars})",
            text.chars().count(),
            segments.len()
        );

        let format = resolve_format(self.format, &config)?;
        let writer = open_writer(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, config.output.pretty_json))
            }
        };
        for (index, segment) in segments.iter().enumerate() {
            formatter.format_segment(segment, index)?;
        }
        formatter.finish()?;
        Ok(())
    }

    fn read_input(&self) -> CliResult<String> {
        match (&self.input, &self.text) {
            (Some(path), _) => FileReader::read_text(path),
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => Err(CliError::ConfigError(
                "provide input text with --input or --text".to_string(),
            )
            .into()),
        }
    }
}
