//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use nounfst_engine::{Analysis, AnalysisMetadata};
use std::io::Write;

/// Plain text formatter - outputs one `word = tag` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, word: &str, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "{word} = {analysis}")?;
        Ok(())
    }

    fn finish(&mut self, _summary: &AnalysisMetadata) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nounfst_engine::MorphAnalyzer;

    #[test]
    fn test_text_lines() {
        let output = MorphAnalyzer::new()
            .analyze_text("fox foxes foxs")
            .unwrap();

        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf);
        for (word, analysis) in output.iter() {
            formatter.format_entry(word, analysis).unwrap();
        }
        formatter.finish(&output.metadata).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "fox = fox+N+SG\nfoxes = fox+N+PL\nfoxs = Invalid Word\n"
        );
    }
}
