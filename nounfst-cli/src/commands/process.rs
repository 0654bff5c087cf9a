//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use nounfst_engine::{AnalysisOutput, ExecutionMode, MorphAnalyzer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Word list read when no input is given
pub const DEFAULT_INPUT: &str = "brown_nouns.txt";

/// Result file written when no output is given
pub const DEFAULT_OUTPUT: &str = "brown_nouns_morphs.txt";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input word list (whitespace separated)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file for the tagged words
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write results to stdout instead of OUTPUT
    #[arg(long)]
    pub stdout: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel classification even for small corpora
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Word to show in the sample block (repeatable; replaces the defaults)
    #[arg(long = "sample", value_name = "WORD")]
    pub sample: Vec<String>,

    /// Do not print the sample block
    #[arg(long)]
    pub no_sample: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting noun analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };

        let corpus = FileReader::read_corpus(&self.input)?;

        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };
        let analyzer = MorphAnalyzer::builder()
            .execution_mode(mode)
            .threads(self.threads.or(config.performance.threads()))
            .parallel_threshold(config.performance.parallel_threshold)
            .build()
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        let output = analyzer
            .analyze_corpus(&corpus)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        if self.stdout {
            self.write_results(&output, format, config.output.pretty_json, io::stdout(), true)?;
        } else {
            let file = File::create(&self.output)
                .with_context(|| format!("Failed to create {}", self.output.display()))?;
            self.write_results(
                &output,
                format,
                config.output.pretty_json,
                BufWriter::new(file),
                quiet,
            )?;
            println!("Done. Results written to {}", self.output.display());
        }

        if config.processing.show_sample && !self.no_sample {
            let words = if self.sample.is_empty() {
                &config.processing.sample_words
            } else {
                &self.sample
            };
            print_sample(&output, words, &mut io::stdout().lock())?;
        }

        Ok(())
    }

    fn write_results<W: Write + Send + Sync + 'static>(
        &self,
        output: &AnalysisOutput,
        format: OutputFormat,
        pretty_json: bool,
        writer: W,
        quiet: bool,
    ) -> Result<()> {
        let mut formatter = format.formatter(writer, pretty_json);
        let mut progress = ProgressReporter::new(quiet);
        progress.init_words(output.entries.len() as u64);

        for (word, analysis) in output.iter() {
            formatter.format_entry(word, analysis)?;
            progress.word_written();
        }

        formatter.finish(&output.metadata)?;
        progress.finish();
        Ok(())
    }
}

/// Print the `word -> tag` demonstration block
pub fn print_sample<W: Write>(
    output: &AnalysisOutput,
    words: &[String],
    writer: &mut W,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Sample outputs:")?;
    for word in words {
        writeln!(writer, "{word} -> {}", output.classify(word))?;
    }
    Ok(())
}
