//! Trailing slash normalization.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use super::redirect_response;

/// Redirect `/path/` to `/path` with a 302, keeping the query string.
///
/// The root path is left alone. The target is always a single-slash,
/// same-origin path: `//host/` must not become a protocol-relative `//host`.
pub(crate) async fn remove_trailing_slash(request: Request, next: Next) -> Response {
    let uri = request.uri();
    let path = uri.path();

    if path != "/"
        && let Some(trimmed) = path.strip_suffix('/')
    {
        let target = local_path(trimmed);
        let location = match uri.query() {
            Some(query) => format!("{target}?{query}"),
            None => target,
        };
        if let Some(response) = redirect_response(StatusCode::FOUND, &location) {
            tracing::debug!(from = %path, to = %location, "Removing trailing slash");
            return response;
        }
    }

    next.run(request).await
}

/// Collapse leading slashes (and backslashes, which browsers treat alike)
/// into one.
fn local_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches(['/', '\\']))
}
