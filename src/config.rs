// src/config.rs
use crate::error::AppError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output encodings the CLI can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment (or a full document with --standalone)
    #[default]
    Html,
    /// Plain text, one line per block
    Text,
    /// The page document as JSON: id, title, metadata and body
    Json,
}

impl OutputFormat {
    /// File extension used when writing to an output directory.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Page bundle files: {"page": {...}, "blocks": [...]} or a bare block array
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Wrap HTML output in a complete document with the page title
    #[arg(long, default_value_t = false)]
    pub standalone: bool,

    /// Directory to write one file per input (defaults to stdout)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Number of worker threads for batch conversion (default: auto)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Validated conversion configuration that drives the pipeline.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub inputs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub standalone: bool,
    pub output_dir: Option<PathBuf>,
    pub jobs: Option<usize>,
}

impl RenderConfig {
    /// Resolves a complete configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.inputs.is_empty() {
            return Err(AppError::InvalidConfiguration(
                "at least one input file is required".to_string(),
            ));
        }

        if cli.jobs == Some(0) {
            return Err(AppError::InvalidConfiguration(
                "--jobs must be at least 1".to_string(),
            ));
        }

        if cli.standalone && cli.format != OutputFormat::Html {
            log::warn!(
                "--standalone only applies to HTML output; ignoring it for {:?}",
                cli.format
            );
        }

        Ok(RenderConfig {
            inputs: cli.inputs,
            format: cli.format,
            standalone: cli.standalone && cli.format == OutputFormat::Html,
            output_dir: cli.output_dir.map(PathBuf::from),
            jobs: cli.jobs,
        })
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            format: OutputFormat::Html,
            standalone: false,
            output_dir: None,
            jobs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::resolve(parse(&["notion2html", "page.json"])).unwrap();
        assert_eq!(config.inputs, vec![PathBuf::from("page.json")]);
        assert_eq!(config.format, OutputFormat::Html);
        assert!(!config.standalone);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_standalone_only_for_html() {
        let config = RenderConfig::resolve(parse(&[
            "notion2html",
            "--format",
            "text",
            "--standalone",
            "a.json",
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.standalone);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let result = RenderConfig::resolve(parse(&["notion2html", "-j", "0", "a.json"]));
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_missing_inputs_rejected_by_parser() {
        assert!(CommandLineInput::try_parse_from(["notion2html"]).is_err());
    }
}
