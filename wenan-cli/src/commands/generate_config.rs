//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration to point at your template corpus");
        println!("2. Use it for generation:");
        println!(
            "   wenan generate --config {} -n 商品名 -d 商品介绍",
            self.output.display()
        );
        println!("3. Or for segmentation:");
        println!(
            "   wenan split --config {} --input copy.txt",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# wenan CLI configuration

[corpus]
# Default template corpus file, one paragraph per line.
# Used by `generate` when --corpus is not given.
# path = "templates.txt"

[segment]
# Maximum characters per segment. 150 matches the per-request limit of
# common Chinese speech synthesis services.
max_chars = 150

[output]
# Default output format: "text" or "json"
default_format = "text"
# Pretty print JSON output
pretty_json = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template_contains_sections() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("config.toml"),
        };
        let template = args.generate_template();
        assert!(template.contains("[corpus]"));
        assert!(template.contains("[segment]"));
        assert!(template.contains("[output]"));
    }

    #[test]
    fn test_generated_template_parses_as_config() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("config.toml"),
        };
        let config: CliConfig = toml::from_str(&args.generate_template()).unwrap();
        assert_eq!(config.segment.max_chars, 150);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("wenan.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("max_chars = 150"));
    }
}
