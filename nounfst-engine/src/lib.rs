//! Batch orchestration for noun analysis
//!
//! This crate runs the core analyzer over whole corpora: it derives the
//! root vocabulary once, picks an execution strategy and collects the
//! per-word results with summary counts.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod output;
pub mod processor;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use output::{AnalysisMetadata, AnalysisOutput, WordAnalysis};
pub use processor::{MorphAnalyzer, MorphAnalyzerBuilder};

// Re-export from core for convenience
pub use nounfst_core::{Analysis, Corpus, Number, RootSet, DEFAULT_SAMPLE_WORDS};
