//! Corpus analyzer and builder

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    output::{AnalysisMetadata, AnalysisOutput},
};
use nounfst_core::{Corpus, RootVocabularyBuilder};
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Analyzes whole corpora
///
/// Builds the root vocabulary once per corpus, then classifies every word
/// with the configured execution strategy. The parallel executor, and its
/// worker pool when a thread count is set, lives as long as the analyzer.
#[derive(Debug, Clone, Default)]
pub struct MorphAnalyzer {
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

impl MorphAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let parallel = match config.execution_mode {
            ExecutionMode::Sequential => ParallelExecutor::default(),
            _ => ParallelExecutor::new(config.threads)?,
        };

        Ok(Self {
            config,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }

    /// Start a builder
    pub fn builder() -> MorphAnalyzerBuilder {
        MorphAnalyzerBuilder::new()
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve the mode to run for a corpus of `word_count` words
    ///
    /// Without the `parallel` feature every request resolves to
    /// [`ExecutionMode::Sequential`], which is what actually runs.
    pub fn select_mode(&self, word_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(word_count, self.config.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }

    /// Extract a corpus from raw text and analyze it
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisOutput> {
        self.analyze_corpus(&Corpus::from_text(text))
    }

    /// Analyze raw words; invalid ones are dropped and duplicates merged
    pub fn analyze_words<I, S>(&self, words: I) -> Result<AnalysisOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.analyze_corpus(&Corpus::from_words(words))
    }

    /// Analyze a corpus
    pub fn analyze_corpus(&self, corpus: &Corpus) -> Result<AnalysisOutput> {
        let start = Instant::now();
        let words = corpus.words();

        let roots = RootVocabularyBuilder::new().build(words);
        let mode = self.select_mode(words.len());
        log::debug!("Classifying {} words in {mode:?} mode", words.len());

        let entries = self.executor(mode).classify_all(words, &roots)?;
        let metadata = AnalysisMetadata::tally(&entries, roots.len(), mode, start.elapsed());

        log::info!(
            "Analyzed {} words: {} singular, {} plural, {} invalid ({} roots)",
            metadata.total_words,
            metadata.singular,
            metadata.plural,
            metadata.invalid,
            metadata.root_count
        );

        Ok(AnalysisOutput {
            entries,
            roots,
            metadata,
        })
    }

    fn executor(&self, mode: ExecutionMode) -> &dyn Executor {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => &self.parallel,
            _ => &SequentialExecutor,
        }
    }
}

/// Builder for [`MorphAnalyzer`]
#[derive(Debug, Default)]
pub struct MorphAnalyzerBuilder {
    config: EngineConfig,
}

impl MorphAnalyzerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count (None = rayon default)
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold in words
    pub fn parallel_threshold(mut self, words: usize) -> Self {
        self.config.parallel_threshold = words;
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<MorphAnalyzer> {
        MorphAnalyzer::with_config(self.config)
    }
}
