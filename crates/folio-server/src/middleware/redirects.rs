//! Redirect table middleware.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use super::redirect_response;
use crate::state::AppState;

/// Answer requests whose pathname has a redirect rule.
///
/// Matches the pathname exactly; the query string is ignored.
pub(crate) async fn apply_redirects(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(rule) = state.redirects.lookup(request.uri().path()) {
        let status = StatusCode::from_u16(rule.status).unwrap_or(StatusCode::FOUND);
        match redirect_response(status, &rule.to) {
            Some(response) => {
                tracing::debug!(from = %rule.from, to = %rule.to, status = rule.status, "Redirecting");
                return response;
            }
            None => tracing::warn!(from = %rule.from, to = %rule.to, "Skipping redirect with invalid target"),
        }
    }

    next.run(request).await
}
