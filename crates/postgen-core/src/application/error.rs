//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not input rules.
//! Input rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::services::GenerationStage;
use crate::error::{ErrorCategory, PostgenError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An exclusive create hit an existing file or directory.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// Blog directories or categories could not be listed.
    #[error("Cannot read directory {path}: {reason}")]
    DirectoryDiscovery { path: PathBuf, reason: String },

    /// One step of post or category generation failed.
    #[error("Generating {object} failed while {stage} at {path}")]
    GenerationFailed {
        object: String,
        stage: GenerationStage,
        path: PathBuf,
        #[source]
        source: Box<PostgenError>,
    },

    /// The prompter could not obtain an answer (closed input, Ctrl-C).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A shared adapter's lock was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Nothing was overwritten at {}", path.display()),
                "Choose a different title or category name".into(),
            ],
            Self::DirectoryDiscovery { path, .. } => vec![
                format!("Could not list {}", path.display()),
                "There might be no category folder in your blog directory".into(),
                "Expected layout: <blog>/contents/<category>/posts".into(),
            ],
            Self::GenerationFailed { path, source, .. } => {
                let mut suggestions = vec![format!(
                    "Files created before {} were left in place",
                    path.display()
                )];
                suggestions.extend(source.suggestions());
                suggestions
            }
            Self::PromptFailed { .. } => vec![
                "Run postgen from an interactive terminal".into(),
                "Please restart".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::DirectoryDiscovery { .. } => ErrorCategory::NotFound,
            Self::GenerationFailed { source, .. } => source.category(),
            Self::PromptFailed { .. } => ErrorCategory::Cancelled,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }

    /// `true` when this error, or the error it wraps, is `AlreadyExists`.
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::AlreadyExists { .. } => true,
            Self::GenerationFailed { source, .. } => source.is_already_exists(),
            _ => false,
        }
    }
}
