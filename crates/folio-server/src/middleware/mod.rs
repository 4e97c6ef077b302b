//! HTTP middleware.

pub(crate) mod redirects;
pub(crate) mod security;
pub(crate) mod trailing_slash;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Build a redirect response, or `None` if `location` isn't a valid header value.
pub(crate) fn redirect_response(status: StatusCode, location: &str) -> Option<Response> {
    let location = HeaderValue::from_str(location).ok()?;
    Some((status, [(header::LOCATION, location)]).into_response())
}
