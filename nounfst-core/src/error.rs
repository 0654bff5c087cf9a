//! Core error types (deterministic only)

use thiserror::Error;

/// Errors raised while validating analysis inputs
///
/// Returned by [`crate::Token::parse`]. Classification itself never
/// fails: a word rejected here is reported as [`crate::Analysis::Invalid`]
/// and dropped from a [`crate::Corpus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input was empty after trimming
    #[error("empty token")]
    EmptyToken,

    /// Input contains something other than ASCII letters
    #[error("invalid token '{0}': only the letters a-z are allowed")]
    InvalidToken(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
