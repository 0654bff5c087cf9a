//! Corpus extraction from raw text

use crate::token::Token;
use std::collections::BTreeSet;

/// Words demonstrated after a corpus run
pub const DEFAULT_SAMPLE_WORDS: [&str; 9] = [
    "fox", "foxes", "foxs", "try", "bus", "busss", "boys", "watch", "watches",
];

/// Deduplicated, sorted word list taken from text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Split `text` on whitespace and keep the pieces that normalize to tokens
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Build from arbitrary raw words; invalid ones are dropped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<Token> = words
            .into_iter()
            .filter_map(|w| w.as_ref().parse().ok())
            .collect();

        Self {
            words: unique.into_iter().map(Token::into_string).collect(),
        }
    }

    /// Words in sorted order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word survived extraction
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
