use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Returns the health status of the server and store.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    // Check store health by attempting a read transaction
    let store = state.store.clone();
    let store_status = tokio::task::spawn_blocking(move || match store.begin_read() {
        Ok(_) => "connected",
        Err(e) => {
            tracing::error!("Store health check failed: {:?}", e);
            "disconnected"
        }
    })
    .await
    .unwrap_or("error");

    Json(json!({
        "status": if store_status == "connected" { "healthy" } else { "unhealthy" },
        "database": store_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
