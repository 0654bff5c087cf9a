//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;

/// Default corpus size (in words) from which adaptive mode goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50_000;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum corpus size in words for parallel classification
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Always classify on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
        }
    }

    /// Always classify on the thread pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Self::default()
        }
    }

    /// Check the configuration for impossible values
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(EngineError::ConfigError(
                "parallel_threshold must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
