//! Administrative endpoints
//!
//! No auth guard in the current scope; callers must treat these routes
//! as trusted-network-only.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::delete,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{OccupancyRecord, OccupancyRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Delete response with the removed row
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted: OccupancyRecord,
}

/// DELETE /api/admin/occupancy/{id}
async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = OccupancyRepo::new(&state.pool).delete(id).await?;

    tracing::info!(id = deleted.id, "Deleted occupancy record");
    Ok(Json(DeleteResponse {
        message: "Record deleted successfully",
        deleted,
    }))
}

/// Admin routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/admin/occupancy/{id}", delete(delete_record))
}
