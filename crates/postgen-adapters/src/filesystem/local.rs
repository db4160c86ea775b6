//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use postgen_core::{
    application::{ApplicationError, ports::DirEntry, ports::Filesystem},
    error::{PostgenError, PostgenResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> PostgenResult<()> {
        trace!(path = %path.display(), "create_dir");
        fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir_all(&self, path: &Path) -> PostgenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_file(&self, path: &Path, content: &str) -> PostgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "create_file");
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "create file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_dir(&self, path: &Path) -> PostgenResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))? {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory"))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "read file type"))?
                .is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PostgenError {
    if e.kind() == io::ErrorKind::AlreadyExists {
        return ApplicationError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into();
    }

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
