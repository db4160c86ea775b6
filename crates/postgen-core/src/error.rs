//! Unified error handling for postgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for postgen core operations.
#[derive(Debug, Error, Clone)]
pub enum PostgenError {
    /// Errors from the domain layer (input rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PostgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in postgen".into(),
                "Please report this issue at: https://github.com/cosecruz/postgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when an exclusive create found something already in place.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_already_exists())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type PostgenResult<T> = Result<T, PostgenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> PostgenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> PostgenResult<T> {
        self.map_err(|e| PostgenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::services::GenerationStage;

    #[test]
    fn already_exists_is_seen_through_generation_failure() {
        let inner: PostgenError = ApplicationError::AlreadyExists {
            path: PathBuf::from("/blog/contents/tech"),
        }
        .into();
        let outer: PostgenError = ApplicationError::GenerationFailed {
            object: "category directory".into(),
            stage: GenerationStage::DirectoryCreated,
            path: PathBuf::from("/blog/contents/tech"),
            source: Box::new(inner),
        }
        .into();

        assert!(outer.is_already_exists());
        assert_eq!(outer.category(), ErrorCategory::Validation);
    }

    #[test]
    fn empty_choice_set_is_configuration_error() {
        let err: PostgenError = DomainError::EmptyChoiceSet {
            subject: "category".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_already_exists());
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("rendering").unwrap_err();
        assert!(matches!(err, PostgenError::Internal { ref message } if message == "rendering: boom"));
    }
}
