//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use nounfst_engine::config::DEFAULT_PARALLEL_THRESHOLD;
use nounfst_engine::DEFAULT_SAMPLE_WORDS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Print the sample block after a run
    pub show_sample: bool,

    /// Words classified in the sample block
    pub sample_words: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            show_sample: true,
            sample_words: DEFAULT_SAMPLE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Corpus size (words) from which classification runs in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_threads: 0,
        }
    }
}

impl PerformanceConfig {
    /// Worker threads as an engine setting
    pub fn threads(&self) -> Option<usize> {
        match self.worker_threads {
            0 => None,
            n => Some(n),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Output format named by `output.default_format`
    pub fn default_format(&self) -> Result<OutputFormat> {
        self.output
            .default_format
            .parse()
            .map_err(|e: String| CliError::ConfigError(e).into())
    }

    fn validate(&self) -> Result<()> {
        self.default_format()?;

        if self.performance.parallel_threshold == 0 {
            return Err(CliError::ConfigError(
                "performance.parallel_threshold must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Commented template with default values
    pub fn template() -> String {
        let samples = DEFAULT_SAMPLE_WORDS
            .iter()
            .map(|w| format!("\"{w}\""))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# nounfst configuration

[processing]
# Print "word -> tag" lines for the sample words after a run
show_sample = true
sample_words = [{samples}]

[output]
# "text" writes "word = tag" lines, "json" writes a document with a summary
default_format = "text"
pretty_json = true

[performance]
# Corpus size in words from which classification runs in parallel
parallel_threshold = {DEFAULT_PARALLEL_THRESHOLD}
# Number of worker threads (0 = auto)
worker_threads = 0
"#
        )
    }
}
