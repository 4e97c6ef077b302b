use folio_storage::{StorageError, StorageErrorKind};

/// Error returned by the documentation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// Corpus enumeration or file read failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Slug does not resolve to a document.
    #[error("Document not found: {0}")]
    NotFound(String),
    /// Front matter header is not valid YAML.
    #[error("Invalid front matter in {filename}: {source}")]
    FrontMatter {
        filename: String,
        #[source]
        source: serde_yaml::Error,
    },
    /// Document could not be rendered.
    #[error("Failed to process {filename}: {message}")]
    Processing { filename: String, message: String },
}

impl DocsError {
    /// Whether the request should be answered as a missing document.
    ///
    /// True for unknown slugs and for slugs storage rejects as invalid paths.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Storage(e) => e.kind == StorageErrorKind::InvalidPath,
            Self::FrontMatter { .. } | Self::Processing { .. } => false,
        }
    }
}
