//! Per-word classification
//!
//! Rules are tried in a fixed order and the first rule whose suffix
//! matches decides the outcome. A suffix rule that matches but cannot
//! confirm its candidate root rejects the word outright; it never falls
//! through to a more general rule.

use crate::analysis::Analysis;
use crate::irregular;
use crate::orthography::{is_vowel, last_byte, penultimate_byte, takes_es_plural};
use crate::token::Token;
use crate::vocabulary::RootSet;

/// Classifies words against a fixed root vocabulary
#[derive(Debug, Clone, Copy)]
pub struct WordClassifier<'a> {
    roots: &'a RootSet,
}

impl<'a> WordClassifier<'a> {
    /// Create a classifier over `roots`
    pub fn new(roots: &'a RootSet) -> Self {
        Self { roots }
    }

    /// Root vocabulary in use
    pub fn roots(&self) -> &'a RootSet {
        self.roots
    }

    /// Classify a raw word
    ///
    /// Input is trimmed and lowercased first; anything that is not a
    /// token afterwards is [`Analysis::Invalid`].
    pub fn classify(&self, word: &str) -> Analysis {
        Token::parse(word).map_or(Analysis::Invalid, |token| self.classify_token(token.as_str()))
    }

    /// Classify a word that is already a normalized token
    pub fn classify_token(&self, word: &str) -> Analysis {
        if let Some(entry) = irregular::lookup(word) {
            return entry.analysis();
        }

        if self.roots.contains(word) {
            return Analysis::singular(word);
        }

        if let Some(stem) = word.strip_suffix("ies") {
            return self.ies_plural(stem);
        }

        if let Some(stem) = word.strip_suffix("es") {
            return self.es_plural(stem);
        }

        if let Some(stem) = word.strip_suffix('s') {
            return self.s_plural(stem);
        }

        Analysis::Invalid
    }

    /// consonant + y -> ies
    fn ies_plural(&self, stem: &str) -> Analysis {
        match last_byte(stem) {
            Some(b) if !is_vowel(b) => {
                let candidate = format!("{stem}y");
                self.confirm_plural(candidate)
            }
            _ => Analysis::Invalid,
        }
    }

    /// sibilant + es
    fn es_plural(&self, stem: &str) -> Analysis {
        if stem.is_empty() || !takes_es_plural(stem) {
            return Analysis::Invalid;
        }
        self.confirm_plural(stem)
    }

    /// bare s
    fn s_plural(&self, stem: &str) -> Analysis {
        if stem.is_empty() || takes_es_plural(stem) {
            // Sibilant stems must take "-es".
            return Analysis::Invalid;
        }

        if stem.ends_with('y') {
            // Only vowel + y keeps the y; consonant + y takes "-ies".
            return match penultimate_byte(stem) {
                Some(b) if is_vowel(b) => self.confirm_plural(stem),
                _ => Analysis::Invalid,
            };
        }

        self.confirm_plural(stem)
    }

    fn confirm_plural(&self, candidate: impl AsRef<str> + Into<String>) -> Analysis {
        if self.roots.contains(candidate.as_ref()) {
            Analysis::plural(candidate)
        } else {
            Analysis::Invalid
        }
    }
}

/// Classify `word` against `roots`
pub fn classify(word: &str, roots: &RootSet) -> Analysis {
    WordClassifier::new(roots).classify(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::INVALID_WORD;

    fn roots() -> RootSet {
        RootSet::from_words(&[
            "fox", "foxes", "boy", "boys", "try", "tries", "watch", "watches", "bus",
        ])
    }

    fn tag(word: &str, roots: &RootSet) -> String {
        classify(word, roots).to_string()
    }

    #[test]
    fn test_reference_cases() {
        let roots = roots();
        assert_eq!(tag("fox", &roots), "fox+N+SG");
        assert_eq!(tag("foxes", &roots), "fox+N+PL");
        assert_eq!(tag("foxs", &roots), INVALID_WORD);
        assert_eq!(tag("try", &roots), "try+N+SG");
        assert_eq!(tag("tries", &roots), "try+N+PL");
        assert_eq!(tag("boys", &roots), "boy+N+PL");
        assert_eq!(tag("watch", &roots), "watch+N+SG");
        assert_eq!(tag("watches", &roots), "watch+N+PL");
        assert_eq!(tag("busss", &roots), INVALID_WORD);
    }

    #[test]
    fn test_bus_is_not_a_root_without_its_plural() {
        // "bus" ends in s and "buses" is absent, so "bus" is not a root;
        // stripping the s leaves "bu" which is not a root either.
        assert_eq!(tag("bus", &roots()), INVALID_WORD);
    }

    #[test]
    fn test_irregulars_short_circuit() {
        let empty = RootSet::default();
        assert_eq!(tag("children", &empty), "child+N+PL");
        assert_eq!(tag("oxen", &empty), "ox+N+PL");

        // Even when the surface form is itself a root
        let roots = RootSet::from_words(&["men", "feet"]);
        assert!(roots.contains("men"));
        assert_eq!(tag("men", &roots), "man+N+PL");
        assert_eq!(tag("feet", &roots), "foot+N+PL");
    }

    #[test]
    fn test_irregular_roots_are_singular() {
        let roots = RootSet::irregular_only();
        assert_eq!(tag("child", &roots), "child+N+SG");
        assert_eq!(tag("mouse", &roots), "mouse+N+SG");
        assert_eq!(tag("persons", &roots), "person+N+PL");
    }

    #[test]
    fn test_preprocessing() {
        let roots = roots();
        assert_eq!(tag("  Foxes \n", &roots), "fox+N+PL");
        assert_eq!(tag("BOYS", &roots), "boy+N+PL");
        assert_eq!(tag("", &roots), INVALID_WORD);
        assert_eq!(tag("   ", &roots), INVALID_WORD);
        assert_eq!(tag("fox1", &roots), INVALID_WORD);
        assert_eq!(tag("fox-es", &roots), INVALID_WORD);
    }

    #[test]
    fn test_classify_agrees_with_token_parsing() {
        let roots = roots();
        let classifier = WordClassifier::new(&roots);
        for raw in ["  Foxes ", "TRIES", "", "\t", "fox1", "it's", "naïve", "boys"] {
            let expected = match Token::parse(raw) {
                Ok(token) => classifier.classify_token(token.as_str()),
                Err(_) => Analysis::Invalid,
            };
            assert_eq!(classifier.classify(raw), expected, "{raw:?}");
        }
    }

    #[test]
    fn test_ies_rule() {
        let roots = RootSet::from_words(&["try", "key", "pie"]);
        // vowel before "ies" blocks the rule
        assert_eq!(tag("keies", &roots), INVALID_WORD);
        // bare "ies" has an empty stem
        assert_eq!(tag("ies", &roots), INVALID_WORD);
        // "pies" is decided by the "ies" rule ("py" is unknown) even though
        // the "s" rule would have found "pie"
        assert_eq!(tag("pies", &roots), INVALID_WORD);
        // unattested candidate
        assert_eq!(tag("cries", &roots), INVALID_WORD);
    }

    #[test]
    fn test_es_rule() {
        let roots = RootSet::from_words(&["dish", "quiz", "cake", "box"]);
        assert_eq!(tag("dishes", &roots), "dish+N+PL");
        assert_eq!(tag("quizes", &roots), "quiz+N+PL");
        assert_eq!(tag("boxes", &roots), "box+N+PL");
        // non-sibilant stem is rejected without trying the "s" rule
        assert_eq!(tag("cakes", &roots), INVALID_WORD);
        // sibilant stem but unattested root
        assert_eq!(tag("churches", &roots), INVALID_WORD);
        assert_eq!(tag("es", &roots), INVALID_WORD);
    }

    #[test]
    fn test_s_rule() {
        let roots = RootSet::from_words(&["cat", "boy", "fly", "dish", "y"]);
        assert_eq!(tag("cats", &roots), "cat+N+PL");
        assert_eq!(tag("boys", &roots), "boy+N+PL");
        // consonant + y must use "ies"
        assert_eq!(tag("flys", &roots), INVALID_WORD);
        // single-letter "y" stem has no preceding letter
        assert_eq!(tag("ys", &roots), INVALID_WORD);
        // sibilant stems must use "es"
        assert_eq!(tag("dishs", &roots), INVALID_WORD);
        // unknown root
        assert_eq!(tag("dogs", &roots), INVALID_WORD);
        assert_eq!(tag("s", &roots), INVALID_WORD);
    }

    #[test]
    fn test_unknown_non_s_word() {
        assert_eq!(tag("zebra", &roots()), INVALID_WORD);
    }

    #[test]
    fn test_classifier_is_reusable() {
        let roots = roots();
        let classifier = WordClassifier::new(&roots);
        assert_eq!(classifier.classify("foxes"), classifier.classify("foxes"));
        assert!(std::ptr::eq(classifier.roots(), &roots));
    }
}
