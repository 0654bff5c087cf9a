//! Parallel execution strategy
//!
//! Words are classified independently against the shared, read-only root
//! set, so the corpus is simply split across the rayon pool.

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    output::WordAnalysis,
};
use nounfst_core::{RootSet, WordClassifier};
use rayon::prelude::*;
use std::sync::Arc;

/// Parallel multi-threaded executor
///
/// A dedicated pool is built once when a thread count is given and shared
/// by every clone; otherwise the global rayon pool is used.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl ParallelExecutor {
    /// Create a new parallel executor (None = global rayon pool)
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .thread_name(|i| format!("nounfst-{i}"))
                    .build()
                    .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
                Some(Arc::new(pool))
            }
            None => None,
        };
        Ok(Self { pool })
    }

    /// Worker threads the executor will use
    pub fn num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }

    fn classify_par(words: &[String], roots: &RootSet) -> Vec<WordAnalysis> {
        let classifier = WordClassifier::new(roots);

        words
            .par_iter()
            .map(|word| WordAnalysis::new(word.as_str(), classifier.classify(word)))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn classify_all(&self, words: &[String], roots: &RootSet) -> Result<Vec<WordAnalysis>> {
        log::debug!(
            "Classifying {} words on {} threads",
            words.len(),
            self.num_threads()
        );
        Ok(match &self.pool {
            Some(pool) => pool.install(|| Self::classify_par(words, roots)),
            None => Self::classify_par(words, roots),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;

    fn corpus() -> Vec<String> {
        let mut words: Vec<String> = (0..500)
            .flat_map(|i| {
                let base: String = format!("{i:03}")
                    .bytes()
                    .map(|b| (b'a' + (b - b'0')) as char)
                    .collect();
                [base.clone(), format!("{base}s"), format!("{base}es")]
            })
            .collect();
        words.sort();
        words.dedup();
        words
    }

    #[test]
    fn test_matches_sequential() {
        let words = corpus();
        let roots = RootSet::from_words(&words);

        let sequential = SequentialExecutor.classify_all(&words, &roots).unwrap();
        let parallel = ParallelExecutor::new(None)
            .unwrap()
            .classify_all(&words, &roots)
            .unwrap();
        let pooled = ParallelExecutor::new(Some(2))
            .unwrap()
            .classify_all(&words, &roots)
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential, pooled);
    }

    #[test]
    fn test_pool_is_built_once_and_shared() {
        let executor = ParallelExecutor::new(Some(2)).unwrap();
        assert_eq!(executor.num_threads(), 2);

        let clone = executor.clone();
        let (a, b) = (executor.pool.as_ref().unwrap(), clone.pool.as_ref().unwrap());
        assert!(Arc::ptr_eq(a, b));

        let words = corpus();
        let roots = RootSet::from_words(&words);
        let first = executor.classify_all(&words, &roots).unwrap();
        let second = executor.classify_all(&words, &roots).unwrap();
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(a, executor.pool.as_ref().unwrap()));
    }

    #[test]
    fn test_global_pool_when_unsized() {
        let executor = ParallelExecutor::new(None).unwrap();
        assert!(executor.pool.is_none());
        assert_eq!(executor.num_threads(), rayon::current_num_threads());
    }

    #[test]
    fn test_mode() {
        assert_eq!(ParallelExecutor::default().mode(), ExecutionMode::Parallel);
    }
}
