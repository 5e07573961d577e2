//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use asic_types::DatabaseProbe;

/// Application state shared across handlers.
pub struct AppState<P: DatabaseProbe> {
    pub probe: P,
}

/// Health check endpoint. Reports 503 when the database cannot be reached.
#[tracing::instrument(skip(state))]
pub async fn health<P: DatabaseProbe>(State(state): State<Arc<AppState<P>>>) -> Response {
    match state.probe.ping().await {
        Ok(()) => Json(serde_json::json!({
            "status": "healthy",
            "database": "ok"
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unhealthy",
                    "database": "unavailable"
                })),
            )
                .into_response()
        }
    }
}
