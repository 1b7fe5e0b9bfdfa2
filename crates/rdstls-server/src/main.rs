//! rdstls server binary

use std::sync::Arc;

use rdstls_server::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db_path = std::env::var("RDSTLS_DB").unwrap_or_else(|_| "rdstls.db".to_string());
    let addr = std::env::var("RDSTLS_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let state = Arc::new(AppState::with_database(&db_path)?);

    serve(&addr, state).await
}
