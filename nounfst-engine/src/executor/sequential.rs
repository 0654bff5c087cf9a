//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    output::WordAnalysis,
};
use nounfst_core::{RootSet, WordClassifier};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn classify_all(&self, words: &[String], roots: &RootSet) -> Result<Vec<WordAnalysis>> {
        let classifier = WordClassifier::new(roots);

        Ok(words
            .iter()
            .map(|word| WordAnalysis::new(word.as_str(), classifier.classify(word)))
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let words: Vec<String> = ["watches", "fox", "foxes", "foxs"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let roots = RootSet::from_words(&["fox", "watch"]);

        let entries = SequentialExecutor.classify_all(&words, &roots).unwrap();
        let tags: Vec<String> = entries.iter().map(|e| e.analysis.to_string()).collect();

        assert_eq!(
            tags,
            ["watch+N+PL", "fox+N+SG", "fox+N+PL", "Invalid Word"]
        );
        assert_eq!(entries[0].word, "watches");
    }

    #[test]
    fn test_empty_input() {
        let entries = SequentialExecutor
            .classify_all(&[], &RootSet::irregular_only())
            .unwrap();
        assert!(entries.is_empty());
    }
}
