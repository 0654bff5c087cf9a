//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod analyze;
pub mod generate_config;
pub mod process;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze every word of a word list and write the tags
    Process(process::ProcessArgs),

    /// Classify individual words
    Analyze(analyze::AnalyzeArgs),

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(quiet),
            Commands::Analyze(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    let help = format
                        .to_possible_value()
                        .and_then(|v| v.get_help().map(|h| h.to_string()))
                        .unwrap_or_default();
                    println!("  {:<6} {help}", format.as_str());
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when running under tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
