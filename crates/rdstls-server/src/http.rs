//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use rdstls_core::Customer;

use crate::AppState;

/// Fixed greeting; independent of store health
pub async fn welcome() -> &'static str {
    "Welcome to RDS TLS app"
}

/// List every customer in store order.
///
/// A store failure maps to 500 here, the sole translation point to a client
/// status. An empty array only ever means zero records.
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, (StatusCode, String)> {
    let store = state
        .store
        .lock()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Store lock poisoned: {}", e)))?;

    let customers = store.list_all().map_err(|e| {
        tracing::error!("customer listing failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(customers))
}
