//! Document API endpoint.
//!
//! Renders a single document for a path below `/docs`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use folio_site::{Document, doc_slug_for_path};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/docs/{path}.
#[derive(Serialize)]
pub(crate) struct DocResponse {
    /// Rendered document.
    doc: Document,
}

/// Handle GET /api/docs (the docs index).
pub(crate) async fn get_root_doc(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    render_doc(&state, "")
}

/// Handle GET /api/docs/{*path}.
pub(crate) async fn get_doc(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, ServerError> {
    render_doc(&state, &path)
}

/// Render the document behind `path`.
///
/// Only successful responses are cacheable; they vary on `Cookie`.
fn render_doc(state: &AppState, path: &str) -> Result<Response, ServerError> {
    let slug = doc_slug_for_path(path);
    let doc = state
        .docs
        .doc(&slug)
        .map_err(|e| ServerError::from_doc_error(&format!("/docs/{path}"), e))?;

    let mut response = Json(DocResponse { doc }).into_response();
    let headers = response.headers_mut();
    if let Some(cache_control) = &state.cache_control {
        headers.insert(header::CACHE_CONTROL, cache_control.clone());
    }
    headers.insert(header::VARY, HeaderValue::from_static("Cookie"));

    Ok(response)
}
