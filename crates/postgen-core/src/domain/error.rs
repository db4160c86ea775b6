// ============================================================================
// domain/error.rs - BLOG DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (prompt loops report them and keep going)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input validation
    // ========================================================================
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Invalid post title '{title}': {reason}")]
    InvalidTitle { title: String, reason: String },

    #[error("Invalid category name '{name}': {reason}")]
    InvalidCategoryName { name: String, reason: String },

    #[error("Invalid color '{value}': expected '#' followed by six hex digits")]
    InvalidColor { value: String },

    #[error("'{choice}' is not one of the offered {subject} options")]
    UnknownChoice { subject: String, choice: String },

    // ========================================================================
    // Blog layout
    // ========================================================================
    #[error("No {subject} found")]
    EmptyChoiceSet { subject: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyInput => vec!["Type at least one non-space character".into()],
            Self::InvalidTitle { .. } => vec![
                "Use letters, digits and spaces in the title".into(),
                "Characters like ':', '/', '?', '=' are removed from file names".into(),
            ],
            Self::InvalidCategoryName { name, .. } => vec![
                format!("'{}' cannot be used as a directory name", name),
                "Examples: tech, daily-log, Rust Notes".into(),
            ],
            Self::EmptyChoiceSet { subject } => vec![
                format!("Check that a {} exists in your blog", subject),
                "Expected layout: <blog>/contents/<category>/posts".into(),
                "Run postgen from the root of your blog project".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput
            | Self::InvalidTitle { .. }
            | Self::InvalidCategoryName { .. }
            | Self::InvalidColor { .. }
            | Self::UnknownChoice { .. } => ErrorCategory::Validation,
            Self::EmptyChoiceSet { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
