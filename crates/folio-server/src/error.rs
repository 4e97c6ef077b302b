//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_site::DocsError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Document not found for the requested path.
    #[error("Document not found: {0}")]
    DocNotFound(String),

    /// Menu or document pipeline failure.
    #[error(transparent)]
    Docs(#[from] DocsError),
}

impl ServerError {
    /// Map a pipeline error for `path`, turning missing documents into 404s.
    pub(crate) fn from_doc_error(path: &str, err: DocsError) -> Self {
        if err.is_not_found() {
            Self::DocNotFound(path.to_owned())
        } else {
            Self::Docs(err)
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::DocNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Document not found", "path": path}),
            ),
            Self::Docs(e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
