//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use nounfst_engine::Corpus;
use std::fs;
use std::path::Path;

/// Reads word lists from disk
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text, reporting a missing file distinctly
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::InputNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and extract its corpus
    pub fn read_corpus(path: &Path) -> Result<Corpus> {
        let text = Self::read_text(path)?;
        let corpus = Corpus::from_text(&text);
        log::info!(
            "Loaded {} distinct words from {}",
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }
}
