//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{redirects, security, trailing_slash};
use crate::state::AppState;

/// Create the application router.
///
/// Requests pass trailing-slash normalization first, then the redirect
/// table, then reach the API routes.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/menu", get(handlers::menu::get_menu))
        .route("/api/docs", get(handlers::docs::get_root_doc))
        .route("/api/docs/{*path}", get(handlers::docs::get_doc))
        .layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            redirects::apply_redirects,
        ))
        .layer(axum::middleware::from_fn(
            trailing_slash::remove_trailing_slash,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
