//! Rule-based morphological analysis of English nouns
//!
//! Given a word list, decides for each word whether it is a singular or
//! plural noun and recovers its singular root, producing tags such as
//! `fox+N+PL`, `boy+N+SG` or `Invalid Word`.
//!
//! # Architecture
//!
//! Analysis runs in two stages:
//! - **Vocabulary**: [`RootVocabularyBuilder`] scans the whole corpus once
//!   and derives the set of attested singular roots.
//! - **Classification**: [`WordClassifier`] applies the irregular table
//!   and the ordered suffix rules (`-ies`, `-es`, `-s`) to each word,
//!   consulting the read-only [`RootSet`].
//!
//! Classification is a pure function of the word and the root set, so a
//! corpus can be classified in any order or in parallel.
//!
//! # Example
//!
//! ```rust
//! use nounfst_core::{Corpus, RootSet, WordClassifier};
//!
//! let corpus = Corpus::from_text("fox foxes boy boys try tries watch watches");
//! let roots = RootSet::from_words(corpus.words());
//! let classifier = WordClassifier::new(&roots);
//!
//! assert_eq!(classifier.classify("foxes").to_string(), "fox+N+PL");
//! assert_eq!(classifier.classify("tries").to_string(), "try+N+PL");
//! assert_eq!(classifier.classify("foxs").to_string(), "Invalid Word");
//! assert_eq!(classifier.classify("children").to_string(), "child+N+PL");
//! ```

pub mod analysis;
pub mod classifier;
pub mod corpus;
pub mod error;
pub mod irregular;
pub mod orthography;
pub mod token;
pub mod vocabulary;

pub use analysis::{Analysis, Number, INVALID_WORD};
pub use classifier::{classify, WordClassifier};
pub use corpus::{Corpus, DEFAULT_SAMPLE_WORDS};
pub use error::{CoreError, Result};
pub use irregular::IrregularEntry;
pub use token::Token;
pub use vocabulary::{RootSet, RootVocabularyBuilder};
