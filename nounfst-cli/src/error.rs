//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input word list does not exist
    InputNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from the engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputNotFound(path) => write!(f, "input file '{path}' not found."),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let error = CliError::InputNotFound("brown_nouns.txt".to_string());
        assert_eq!(error.to_string(), "input file 'brown_nouns.txt' not found.");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown format 'xml'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown format 'xml'"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("thread pool error".to_string());
        assert_eq!(error.to_string(), "Processing error: thread pool error");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: CliResult<()> = Err(CliError::InputNotFound("x.txt".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputNotFound(path)) if path == "x.txt"
        ));
    }
}
