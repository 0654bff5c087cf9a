//! Engine error types

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
