//! Analyze command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use nounfst_engine::{AnalysisOutput, Corpus, MorphAnalyzer};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words to classify
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Word list supplying the root vocabulary (default: the words themselves)
    #[arg(long, value_name = "FILE")]
    pub corpus: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        let output = self.analyze()?;
        let mut stdout = io::stdout().lock();
        for word in &self.words {
            writeln!(stdout, "{word} -> {}", output.classify(word))?;
        }
        Ok(())
    }

    /// Build the vocabulary the words are classified against
    pub fn analyze(&self) -> Result<AnalysisOutput> {
        let corpus = match &self.corpus {
            Some(path) => FileReader::read_corpus(path)?,
            None => Corpus::from_words(&self.words),
        };

        MorphAnalyzer::new()
            .analyze_corpus(&corpus)
            .map_err(|e| CliError::ProcessingError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_words_form_their_own_vocabulary() {
        let args = AnalyzeArgs {
            words: words(&["dish", "dishes", "dishs", "geese"]),
            corpus: None,
        };

        let output = args.analyze().unwrap();
        assert_eq!(output.classify("dishes").to_string(), "dish+N+PL");
        assert_eq!(output.classify("dishs").to_string(), "Invalid Word");
        assert_eq!(output.classify("geese").to_string(), "goose+N+PL");
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_corpus_file_supplies_vocabulary() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("nouns.txt");
        fs::write(&corpus, "city day").unwrap();

        let args = AnalyzeArgs {
            words: words(&["cities", "days", "dogs"]),
            corpus: Some(corpus),
        };

        let output = args.analyze().unwrap();
        assert_eq!(output.classify("cities").to_string(), "city+N+PL");
        assert_eq!(output.classify("days").to_string(), "day+N+PL");
        assert_eq!(output.classify("dogs").to_string(), "Invalid Word");
    }

    #[test]
    fn test_missing_corpus_file() {
        let args = AnalyzeArgs {
            words: words(&["fox"]),
            corpus: Some(PathBuf::from("/nonexistent/nouns.txt")),
        };
        assert!(args.analyze().is_err());
    }
}
