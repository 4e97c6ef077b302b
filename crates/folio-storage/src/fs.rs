//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading the corpus from a local data directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{MARKDOWN_EXTENSION, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Resolves corpus paths against a root data directory. Directory listing
/// walks the tree recursively and fails as a whole if any directory in it
/// can't be read.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use folio_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("data"));
/// let files = storage.list("docs")?;
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Root directory for corpus paths.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory this storage resolves against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate that a corpus path doesn't escape the root directory.
    ///
    /// Rejects absolute paths and paths containing parent directory
    /// components (`..`).
    fn validate_path(path: &str) -> Result<(), StorageError> {
        let escapes = Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Walk `dir_path` recursively, collecting markdown files relative to the listing root.
    fn scan_directory(
        dir_path: &Path,
        rel_prefix: &str,
        files: &mut Vec<String>,
    ) -> Result<(), StorageError> {
        let entries = fs::read_dir(dir_path)
            .map_err(|e| StorageError::io(e, Some(dir_path.to_path_buf())).with_backend(BACKEND))?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                StorageError::io(e, Some(dir_path.to_path_buf())).with_backend(BACKEND)
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = if rel_prefix.is_empty() {
                name
            } else {
                format!("{rel_prefix}/{name}")
            };

            // Symlinks are neither followed nor listed.
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
            if file_type.is_dir() {
                Self::scan_directory(&path, &rel_path, files)?;
            } else if file_type.is_file()
                && path.extension().is_some_and(|e| e == MARKDOWN_EXTENSION)
            {
                files.push(rel_path);
            }
        }

        Ok(())
    }
}

impl Storage for FsStorage {
    fn list(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        Self::validate_path(dir)?;

        let dir_path = self.root.join(dir);
        let mut files = Vec::new();
        Self::scan_directory(&dir_path, "", &mut files)?;
        files.sort();

        tracing::debug!(dir = %dir_path.display(), file_count = files.len(), "Listed corpus");
        Ok(files)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        Self::validate_path(path)?;

        let file_path = self.root.join(path);
        fs::read_to_string(&file_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        Self::validate_path(path).is_ok() && self.root.join(path).is_file()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_corpus() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("guides/advanced")).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(docs.join("guides/index.md"), "# Guides").unwrap();
        fs::write(docs.join("guides/routing.md"), "# Routing").unwrap();
        fs::write(docs.join("guides/advanced/streaming.md"), "# Streaming").unwrap();
        fs::write(docs.join("guides/diagram.png"), "not markdown").unwrap();
        fs::write(temp_dir.path().join("CHANGELOG.md"), "# Changes").unwrap();
        temp_dir
    }

    #[test]
    fn test_list_recursive_sorted() {
        let temp_dir = create_corpus();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let files = storage.list("docs").unwrap();

        assert_eq!(
            files,
            vec![
                "guides/advanced/streaming.md".to_owned(),
                "guides/index.md".to_owned(),
                "guides/routing.md".to_owned(),
                "index.md".to_owned(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_list_skips_symlinks() {
        let temp_dir = create_corpus();
        let docs = temp_dir.path().join("docs");
        std::os::unix::fs::symlink(&docs, docs.join("guides/loop")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("CHANGELOG.md"),
            docs.join("linked.md"),
        )
        .unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let files = storage.list("docs").unwrap();

        assert_eq!(files.len(), 4);
        assert!(!files.iter().any(|f| f.contains("loop") || f == "linked.md"));
    }

    #[test]
    fn test_list_missing_dir_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.list("docs").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_list_rejects_traversal() {
        let temp_dir = create_corpus();
        let storage = FsStorage::new(temp_dir.path().join("docs"));

        let err = storage.list("../").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_read_file() {
        let temp_dir = create_corpus();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert_eq!(storage.read("docs/guides/routing.md").unwrap(), "# Routing");
        assert_eq!(storage.read("CHANGELOG.md").unwrap(), "# Changes");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp_dir = create_corpus();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.read("docs/missing.md").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            err.path.as_deref(),
            Some(Path::new("docs/missing.md"))
        );
    }

    #[test]
    fn test_read_rejects_traversal() {
        let temp_dir = create_corpus();
        let storage = FsStorage::new(temp_dir.path().join("docs"));

        let err = storage.read("../CHANGELOG.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_exists() {
        let temp_dir = create_corpus();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert!(storage.exists("docs/index.md"));
        assert!(!storage.exists("docs/guides"));
        assert!(!storage.exists("docs/nope.md"));
        assert!(!storage.exists("../etc/passwd"));
    }
}
