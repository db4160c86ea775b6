//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use postgen_core::{
    application::{ApplicationError, ports::DirEntry, ports::Filesystem},
    error::PostgenResult,
};

/// In-memory filesystem for testing.
///
/// Follows the same exclusive-create rules as [`LocalFilesystem`]. Paths
/// registered with [`fail_on`](Self::fail_on) make any write to them fail.
///
/// [`LocalFilesystem`]: super::LocalFilesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory (and its parents).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dir_all(path.as_ref());
        }
        self
    }

    /// Seed a file, creating its parents.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make every create call on `path` fail with a filesystem error.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> PostgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> PostgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn check_writable(&self, path: &Path) -> PostgenResult<()> {
        if self.failing.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> PostgenResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.read().map(|inner| inner.exists(path)).unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> PostgenResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;
        if inner.exists(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.check_parent(path)?;
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> PostgenResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;
        if inner.files.contains_key(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.insert_dir_all(path);
        Ok(())
    }

    fn create_file(&self, path: &Path, content: &str) -> PostgenResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;
        if inner.exists(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.check_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> PostgenResult<Vec<DirEntry>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        let child_name = |p: &Path| {
            (p.parent() == Some(path))
                .then(|| p.file_name())
                .flatten()
                .map(|name| name.to_string_lossy().into_owned())
        };

        let dirs = inner
            .directories
            .iter()
            .filter_map(|p| child_name(p))
            .map(DirEntry::dir);
        let files = inner
            .files
            .keys()
            .filter_map(|p| child_name(p))
            .map(DirEntry::file);

        Ok(dirs.chain(files).collect())
    }
}
