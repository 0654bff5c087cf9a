//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use nounfst_engine::{Analysis, AnalysisMetadata};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all entries plus a summary as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// One analysed word in the JSON document
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EntryData {
    /// The corpus word
    pub word: String,
    /// Rendered tag
    pub tag: String,
}

#[derive(Serialize)]
struct Document<'a> {
    entries: &'a [EntryData],
    summary: &'a AnalysisMetadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, word: &str, analysis: &Analysis) -> Result<()> {
        self.entries.push(EntryData {
            word: word.to_string(),
            tag: analysis.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self, summary: &AnalysisMetadata) -> Result<()> {
        let document = Document {
            entries: &self.entries,
            summary,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
