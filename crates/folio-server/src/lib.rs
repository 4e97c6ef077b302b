//! HTTP server for the Folio documentation pipeline.
//!
//! Serves the menu and rendered documents as JSON:
//! - `GET /api/menu`: navigation tree of the docs directory
//! - `GET /api/docs/{*path}`: a single rendered document
//!
//! Every request first passes trailing-slash normalization and the redirect
//! table.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         data_dir: PathBuf::from("data"),
//!         redirects_file: PathBuf::from("_redirects"),
//!         cache_control: Some("max-age=300".to_owned()),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (folio-server)
//!                        │
//!                        ├─► trailing slash ──► 302 /path
//!                        ├─► redirect table ──► 3xx Location
//!                        │
//!                        └─► API handlers ──► Docs (folio-site) ──► FsStorage
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::HeaderValue;
use folio_config::Redirects;
use folio_site::Docs;
use folio_storage::FsStorage;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Data root; documentation pages live in its `docs` directory.
    pub data_dir: PathBuf,
    /// Redirect table file. A missing file means no redirects.
    pub redirects_file: PathBuf,
    /// `Cache-Control` value for document responses (`None` disables).
    pub cache_control: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            data_dir: PathBuf::from("data"),
            redirects_file: PathBuf::from("_redirects"),
            cache_control: Some(folio_config::DEFAULT_CACHE_CONTROL.to_owned()),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the redirect table can't be read, the cache header is
/// invalid, or the server fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let docs = Docs::new(Arc::new(FsStorage::new(config.data_dir.clone())));
    let redirects = Redirects::load(&config.redirects_file)?;
    let cache_control = config
        .cache_control
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        redirect_count = redirects.len(),
        cache = cache_control.is_some(),
        "Serving documentation"
    );

    let state = Arc::new(AppState {
        docs,
        redirects,
        cache_control,
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Folio config.
#[must_use]
pub fn server_config_from_config(config: &folio_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        data_dir: config.content_resolved.data_dir.clone(),
        redirects_file: config.content_resolved.redirects_file.clone(),
        cache_control: config.cache.header_value().map(str::to_owned),
    }
}
