//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = CliConfig::template();

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("Configuration written to {}", path.display());
                println!("Use it with: nounfst process -c {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nounfst.toml");

        let args = GenerateConfigArgs {
            output: Some(path.clone()),
        };
        args.execute().unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_generate_to_unwritable_path() {
        let args = GenerateConfigArgs {
            output: Some(PathBuf::from("/nonexistent/dir/nounfst.toml")),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
