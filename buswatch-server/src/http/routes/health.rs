//! Liveness and readiness endpoints
//!
//! GET / is the unconditional status check and never touches the store.
//! GET /health/ready borrows one connection for a SELECT 1 so operators
//! can see degraded store connectivity without the process appearing down.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db;
use crate::http::server::AppState;

/// Status response for the root check
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

/// GET /health/ready
async fn ready(State(state): State<Arc<AppState>>) -> (StatusCode, Json<StatusResponse>) {
    match db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse { status: "ready" })),
        Err(err) => {
            tracing::error!("Readiness probe failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse { status: "degraded" }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(status))
        .route("/health/ready", get(ready))
}
