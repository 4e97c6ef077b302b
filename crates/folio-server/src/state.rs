//! Application state.
//!
//! Shared state for all request handlers.

use axum::http::HeaderValue;
use folio_config::Redirects;
use folio_site::Docs;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documentation pipeline.
    pub(crate) docs: Docs,
    /// Redirect table, loaded once at start-up.
    pub(crate) redirects: Redirects,
    /// `Cache-Control` value for document responses (`None` when disabled).
    pub(crate) cache_control: Option<HeaderValue>,
}
