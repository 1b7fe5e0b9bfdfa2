//! rdstls-server - HTTP surface over the customer store
//!
//! Two routes: a fixed greeting at `/` and the full customer collection at
//! `/customers`. Each request is handled statelessly; the only shared state
//! is the injected store.

pub mod http;

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use rdstls_core::{CustomerStore, Repository, Result};

/// Shared application state
///
/// The rusqlite connection is not `Sync`, so the store sits behind a mutex.
/// The greeting route never touches it.
pub struct AppState {
    pub store: Mutex<Box<dyn CustomerStore>>,
}

impl AppState {
    /// Wrap an already constructed store
    pub fn new(store: Box<dyn CustomerStore>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Production wiring: open (or create) the SQLite database at `path`
    pub fn with_database(path: impl AsRef<Path>) -> Result<Self> {
        let repository = Repository::new(path)?;
        Ok(Self::new(Box::new(repository)))
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(http::welcome))
        .route("/customers", get(http::list_customers))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(
    addr: &str,
    state: Arc<AppState>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("rdstls server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
