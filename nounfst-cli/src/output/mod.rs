//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use nounfst_engine::{Analysis, AnalysisMetadata};
use std::io::Write;
use std::str::FromStr;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single analysed word
    fn format_entry(&mut self, word: &str, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self, summary: &AnalysisMetadata) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word = tag` line per word
    Text,
    /// JSON document with entries and a summary
    Json,
}

impl OutputFormat {
    /// Format name as accepted on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<W: Write + Send + Sync + 'static>(
        &self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| format!("unknown output format '{s}'"))
    }
}
