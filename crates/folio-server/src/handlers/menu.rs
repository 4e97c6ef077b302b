//! Menu API endpoint.
//!
//! Returns the navigation tree of the docs directory.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_site::MenuNode;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/menu.
#[derive(Serialize)]
pub(crate) struct MenuResponse {
    /// Top-level menu nodes.
    menu: Vec<MenuNode>,
}

/// Handle GET /api/menu.
pub(crate) async fn get_menu(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MenuResponse>, ServerError> {
    let menu = state.docs.menu()?;
    Ok(Json(MenuResponse { menu }))
}
