//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::BTreeMap;

use crate::storage::{MARKDOWN_EXTENSION, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores files in memory keyed by corpus path. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("docs/guide.md", "---\ntitle: Guide\n---\nContent.");
///
/// let files = storage.list("docs").unwrap();
/// let content = storage.read("docs/guide.md").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: BTreeMap<String, String>,
    list_error: Option<StorageErrorKind>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given corpus path and content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Make every `list()` call fail with the given error kind.
    #[must_use]
    pub fn with_list_error(mut self, kind: StorageErrorKind) -> Self {
        self.list_error = Some(kind);
        self
    }
}

impl Storage for MockStorage {
    fn list(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        if let Some(kind) = self.list_error {
            return Err(StorageError::new(kind).with_path(dir).with_backend(BACKEND));
        }

        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir.trim_end_matches('/'))
        };

        // BTreeMap keys are already sorted
        Ok(self
            .files
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter(|rel| {
                rel.rsplit_once('.')
                    .is_some_and(|(_, ext)| ext == MARKDOWN_EXTENSION)
            })
            .map(str::to_owned)
            .collect())
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}
