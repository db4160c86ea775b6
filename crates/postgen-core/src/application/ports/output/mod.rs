//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `postgen-adapters` crate and the CLI provide implementations.

use std::path::Path;

use crate::domain::HexColor;
use crate::error::PostgenResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `postgen_adapters::filesystem::LocalFilesystem` (production)
/// - `postgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` and `create_file` are exclusive: an existing target yields
///   `ApplicationError::AlreadyExists`, never an overwrite
/// - There is no remove operation; partial work is left on disk
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must exist.
    fn create_dir(&self, path: &Path) -> PostgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PostgenResult<()>;

    /// Create a new file with the given content.
    fn create_file(&self, path: &Path, content: &str) -> PostgenResult<()>;

    /// List the immediate children of a directory.
    fn read_dir(&self, path: &Path) -> PostgenResult<Vec<DirEntry>>;
}

/// Port for asking the user questions.
///
/// Implemented by:
/// - `postgen_cli::prompt::TerminalPrompter` (dialoguer)
/// - `postgen_adapters::prompter::ScriptedPrompter` (testing)
///
/// Answers are returned raw; trimming and validation happen in
/// `application::services::prompting`.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask for free text.
    fn ask_text(&self, prompt: &str) -> PostgenResult<String>;

    /// Ask the user to pick one of `options`; returns the chosen option.
    fn ask_choice(&self, prompt: &str, options: &[String]) -> PostgenResult<String>;

    /// Tell the user something without waiting for an answer.
    fn notify(&self, message: &str);
}

/// Port for picking the colors written into posts and descriptions.
#[cfg_attr(test, mockall::automock)]
pub trait ColorSource: Send + Sync {
    fn next_color(&self) -> HexColor;
}
