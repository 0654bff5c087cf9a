//! Execution strategies for classifying a corpus

use crate::error::Result;
use crate::output::WordAnalysis;
use nounfst_core::RootSet;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExecutionMode {
    /// Single-threaded sequential classification
    Sequential,
    /// Multi-threaded classification over a shared root set
    Parallel,
    /// Pick sequential or parallel from the corpus size
    Adaptive,
}

/// Pluggable classification strategy
///
/// Implementations must return one entry per input word, in input order.
pub trait Executor: Send + Sync {
    /// Classify every word against `roots`
    fn classify_all(&self, words: &[String], roots: &RootSet) -> Result<Vec<WordAnalysis>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on corpus size
pub fn auto_select(word_count: usize, threshold: usize) -> ExecutionMode {
    if word_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(0, 100), ExecutionMode::Sequential);
        assert_eq!(auto_select(99, 100), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(100, 100), ExecutionMode::Parallel);

        #[cfg(not(feature = "parallel"))]
        assert_eq!(auto_select(100, 100), ExecutionMode::Sequential);
    }
}
