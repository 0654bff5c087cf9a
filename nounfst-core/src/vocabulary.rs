//! Root vocabulary derivation
//!
//! Scans a corpus once and collects the words that count as singular
//! roots. The vocabulary is closed: a plural only contributes a root when
//! that root is itself attested in the same corpus. Irregular roots are
//! always present.

use crate::irregular;
use crate::token::is_token;
use std::collections::HashSet;

/// Set of known singular roots
///
/// Built once per corpus and read-only afterwards. Every member is a
/// well-formed token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootSet {
    roots: HashSet<String>,
}

impl RootSet {
    /// Root set containing only the irregular roots
    pub fn irregular_only() -> Self {
        RootVocabularyBuilder::new().build::<&str>(&[])
    }

    /// Build a root set from a corpus
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        RootVocabularyBuilder::new().build(words)
    }

    /// Whether `word` is a known root
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    /// Number of roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate roots in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }

    fn insert(&mut self, root: String) {
        debug_assert!(is_token(&root));
        self.roots.insert(root);
    }
}

/// Derives a [`RootSet`] from an observed word list
#[derive(Debug, Clone, Copy, Default)]
pub struct RootVocabularyBuilder;

impl RootVocabularyBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self
    }

    /// Build the root set for `words`
    ///
    /// Words that are not well-formed tokens are ignored.
    pub fn build<S: AsRef<str>>(&self, words: &[S]) -> RootSet {
        let corpus: HashSet<&str> = words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| is_token(w))
            .collect();

        let mut roots = RootSet::default();

        for &word in &corpus {
            if !word.ends_with('s') {
                roots.insert(word.to_string());
            }
        }

        // All suffix rules fire independently for the same word.
        for &word in &corpus {
            if let Some(stem) = word.strip_suffix("ies") {
                let candidate = format!("{stem}y");
                if corpus.contains(candidate.as_str()) {
                    roots.insert(candidate);
                }
            }
            if let Some(stem) = word.strip_suffix("es") {
                if corpus.contains(stem) {
                    roots.insert(stem.to_string());
                }
            }
            if let Some(stem) = word.strip_suffix('s') {
                if corpus.contains(stem) {
                    roots.insert(stem.to_string());
                }
            }
        }

        for root in irregular::roots() {
            roots.insert(root.to_string());
        }

        log::debug!(
            "Built root vocabulary: {} roots from {} corpus words",
            roots.len(),
            corpus.len()
        );

        roots
    }
}
