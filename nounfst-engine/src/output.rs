//! Batch analysis results

use crate::executor::ExecutionMode;
use nounfst_core::{Analysis, Number, RootSet, WordClassifier};
use std::time::Duration;

/// A corpus word paired with its analysis
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordAnalysis {
    /// The word as it appears in the corpus
    pub word: String,
    /// Its classification
    #[cfg_attr(feature = "serde", serde(rename = "tag"))]
    pub analysis: Analysis,
}

impl WordAnalysis {
    /// Pair a word with its analysis
    pub fn new(word: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            word: word.into(),
            analysis,
        }
    }
}

/// Counts and timing for a batch run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisMetadata {
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Distinct words classified
    pub total_words: usize,
    /// Words tagged SG
    pub singular: usize,
    /// Words tagged PL
    pub plural: usize,
    /// Words tagged Invalid Word
    pub invalid: usize,
    /// Size of the derived root vocabulary
    pub root_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl AnalysisMetadata {
    pub(crate) fn tally(
        entries: &[WordAnalysis],
        root_count: usize,
        mode_used: ExecutionMode,
        elapsed: Duration,
    ) -> Self {
        let mut metadata = Self {
            mode_used,
            total_words: entries.len(),
            singular: 0,
            plural: 0,
            invalid: 0,
            root_count,
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        };

        for entry in entries {
            match entry.analysis.number() {
                Some(Number::Singular) => metadata.singular += 1,
                Some(Number::Plural) => metadata.plural += 1,
                None => metadata.invalid += 1,
            }
        }

        metadata
    }
}

/// Output of a corpus analysis
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    /// One entry per corpus word, in corpus (sorted) order
    pub entries: Vec<WordAnalysis>,
    /// Root vocabulary derived from the corpus
    pub roots: RootSet,
    /// Counts and timing
    pub metadata: AnalysisMetadata,
}

impl AnalysisOutput {
    /// Classify an additional word against this run's root vocabulary
    pub fn classify(&self, word: &str) -> Analysis {
        WordClassifier::new(&self.roots).classify(word)
    }

    /// Look up the analysis recorded for a corpus word
    pub fn get(&self, word: &str) -> Option<&Analysis> {
        self.entries
            .binary_search_by(|e| e.word.as_str().cmp(word))
            .ok()
            .map(|i| &self.entries[i].analysis)
    }

    /// Iterate `(word, analysis)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Analysis)> {
        self.entries.iter().map(|e| (e.word.as_str(), &e.analysis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let entries = vec![
            WordAnalysis::new("fox", Analysis::singular("fox")),
            WordAnalysis::new("foxes", Analysis::plural("fox")),
            WordAnalysis::new("foxs", Analysis::Invalid),
            WordAnalysis::new("watches", Analysis::plural("watch")),
        ];

        let metadata = AnalysisMetadata::tally(
            &entries,
            11,
            ExecutionMode::Sequential,
            Duration::from_millis(3),
        );

        assert_eq!(metadata.total_words, 4);
        assert_eq!(metadata.singular, 1);
        assert_eq!(metadata.plural, 2);
        assert_eq!(metadata.invalid, 1);
        assert_eq!(metadata.root_count, 11);
        assert!((metadata.processing_time_ms - 3.0).abs() < f64::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_word_analysis_serializes_tag() {
        let entry = WordAnalysis::new("boys", Analysis::plural("boy"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"word":"boys","tag":"boy+N+PL"}"#);
    }
}
