//! Configuration management for the notebook checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Exercise directory configuration
//! - Output format and exit status policy

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};

use crate::exercise::BUILTIN_EXERCISE;
use crate::validation::CheckResult;

/// Command-line arguments for the notebook checker
#[derive(Debug, Parser)]
#[command(name = "nbcheck")]
#[command(about = "Checks the solution cell of a Jupyter notebook exercise")]
#[command(version)]
pub struct Args {
    /// The Jupyter notebook (.ipynb) to check
    #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
    pub input_file: String,

    /// Exercise whose rules the solution must satisfy
    #[arg(long, default_value = BUILTIN_EXERCISE)]
    pub exercise: String,

    /// Extra directory to search for exercise files
    #[arg(long, help = "Directory containing *.exercise.toml files")]
    pub exercise_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with a non-zero status when the solution does not pass
    #[arg(long)]
    pub strict: bool,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON for grading pipelines
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    /// Exercise to activate
    pub exercise: String,
    /// Exercise directories, lowest priority first
    pub exercise_dirs: Vec<PathBuf>,
    pub format: OutputFormat,
    /// Whether failed checks change the exit status
    pub strict: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut exercise_dirs = Vec::new();

        // User config directory first so an explicit directory wins
        if let Some(config_dir) = dirs::config_dir() {
            exercise_dirs.push(config_dir.join("nbcheck").join("exercises"));
        }

        if let Some(custom_dir) = args.exercise_dir {
            exercise_dirs.push(custom_dir);
        }

        Ok(Config {
            input_file: PathBuf::from(args.input_file),
            exercise: args.exercise,
            exercise_dirs,
            format: args.format,
            strict: args.strict,
            log_level: args.log_level,
        })
    }

    /// Whether a finished check should fail the process
    pub fn fails_run(&self, result: &CheckResult) -> bool {
        self.strict && !result.is_success()
    }

    /// Process exit status for a finished check
    pub fn exit_code_for(&self, result: &CheckResult) -> ExitCode {
        if self.fails_run(result) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
