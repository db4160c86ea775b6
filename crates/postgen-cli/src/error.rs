//! Error handling for the postgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Every error exits with status 1.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use postgen_core::error::PostgenError;

// Re-export so callers only need `use crate::error::*`.
pub use postgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Exit status for every reported failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `postgen-core`.
    #[error("{0}")]
    Core(#[from] PostgenError),

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user interrupted a prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: None,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'postgen init --force' to write a fresh default config".into(),
                "POSTGEN_* environment variables override the file".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "Files written before the interruption were kept".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Cancelled => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// Exit code to pass to the OS.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error or interruption.
    UserError,
    /// Blog or category directories missing.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use postgen_core::{
        application::{ApplicationError, GenerationStage},
        domain::DomainError,
    };

    use super::*;

    fn empty_blog() -> CliError {
        CliError::Core(
            DomainError::EmptyChoiceSet {
                subject: "blog directory".into(),
            }
            .into(),
        )
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            empty_blog(),
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
            CliError::Cancelled,
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn core_message_is_shown_unchanged() {
        assert_eq!(empty_blog().to_string(), "No blog directory found");
        assert_eq!(empty_blog().category(), ErrorCategory::Configuration);
    }

    #[test]
    fn generation_failure_names_object_and_path() {
        let err = CliError::Core(
            ApplicationError::GenerationFailed {
                object: "description file".into(),
                stage: GenerationStage::DescriptionWritten,
                path: PathBuf::from("/b/contents/go/description.json"),
                source: Box::new(
                    ApplicationError::FilesystemError {
                        path: PathBuf::from("/b/contents/go/description.json"),
                        reason: "disk full".into(),
                    }
                    .into(),
                ),
            }
            .into(),
        );

        let plain = err.format_plain(true);
        assert!(plain.contains("description file"));
        assert!(plain.contains("/b/contents/go/description.json"));
        assert!(plain.contains("Caused by: Filesystem error"));
    }

    #[test]
    fn anyhow_becomes_config_error() {
        let err: CliError = anyhow::anyhow!("bad toml").into();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(err.suggestions().iter().any(|s| s.contains("postgen init")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = empty_blog().format_plain(false);
        assert!(s.contains("Error: No blog directory found"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::Cancelled.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn io_error_converts() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, CliError::IoError { .. }));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
