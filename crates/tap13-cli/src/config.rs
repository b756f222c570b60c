// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the tap13 command
//!
//! This module provides the command-line options: which TAP files to read,
//! how to render results, and logging options.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// Summarize TAP version 13 test output
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tap13")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// TAP files to summarize
    ///
    /// Use `-` to read from stdin. Reads stdin when no files are given.
    pub files: Vec<PathBuf>,

    /// Output format for each summary
    #[arg(short, long, value_enum, default_value_t, env = "TAP13_FORMAT")]
    pub format: OutputFormat,

    /// Exit with status 1 if any input does not pass
    #[arg(long, default_value = "false")]
    pub check: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the summaries.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How summaries are printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// File name followed by the fixed-layout text report
    #[default]
    Text,
    /// One JSON object per input
    Json,
}

/// A single input to summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A TAP file
    File(PathBuf),
}

impl Input {
    /// Label printed above the input's summary
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Config {
    /// Inputs in the order given, defaulting to stdin
    #[must_use]
    pub fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::Stdin];
        }
        self.files
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }

    /// Validate the configuration
    ///
    /// Missing files are not an error here; they are reported while
    /// summarizing so the remaining inputs still get processed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - stdin (`-`) is given more than once
    /// - a path names a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        let inputs = self.inputs();
        if inputs.iter().filter(|i| **i == Input::Stdin).count() > 1 {
            return Err(ConfigError::StdinRepeated);
        }
        for input in &inputs {
            if let Input::File(path) = input {
                if path.is_dir() {
                    return Err(ConfigError::NotAFile(path.clone()));
                }
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Stdin can only be read once
    #[error("Standard input (-) given more than once")]
    StdinRepeated,

    /// Input path is a directory
    #[error("Input path is a directory: {0}")]
    NotAFile(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.files.is_empty());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.check);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_inputs_default_to_stdin() {
        let config = Config::default();
        assert_eq!(config.inputs(), vec![Input::Stdin]);
    }

    #[test]
    fn test_inputs_keep_order_and_map_dash() {
        let config = Config {
            files: vec![PathBuf::from("a.tap"), PathBuf::from("-"), PathBuf::from("b.tap")],
            ..Default::default()
        };
        assert_eq!(
            config.inputs(),
            vec![
                Input::File(PathBuf::from("a.tap")),
                Input::Stdin,
                Input::File(PathBuf::from("b.tap")),
            ]
        );
    }

    #[test]
    fn test_input_labels() {
        assert_eq!(Input::Stdin.label(), "<stdin>");
        assert_eq!(Input::File(PathBuf::from("out/run.tap")).label(), "out/run.tap");
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_repeated_stdin() {
        let config = Config {
            files: vec![PathBuf::from("-"), PathBuf::from("-")],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::StdinRepeated)));
    }

    #[test]
    fn test_validate_directory() {
        let config = Config {
            files: vec![std::env::temp_dir()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotAFile(_))));
    }

    #[test]
    fn test_validate_missing_file_is_ok() {
        let config = Config {
            files: vec![PathBuf::from("/nonexistent/path/12345.tap")],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
