//! Occupancy endpoints
//!
//! Request fields are Options so an absent field surfaces as a 400
//! validation error rather than an extractor rejection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{OccupancyRecord, OccupancyRepo, OccupancySummary};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::NewReading;

/// Create occupancy request
#[derive(Debug, Deserialize)]
pub struct CreateOccupancyRequest {
    pub camera_id: Option<String>,
    pub occupancy: Option<i32>,
    pub capacity: Option<i32>,
}

/// POST /api/occupancy - record a reading
async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOccupancyRequest>,
) -> Result<(StatusCode, Json<OccupancyRecord>), ApiError> {
    let reading = NewReading::new(req.camera_id, req.occupancy, req.capacity)?;
    let record = OccupancyRepo::new(&state.pool).insert(reading).await?;

    tracing::info!(camera_id = %record.camera_id, "Recorded occupancy reading");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/occupancy - 50 most recent readings across all cameras
async fn list_recent(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OccupancyRecord>>, ApiError> {
    let records = OccupancyRepo::new(&state.pool).list_recent().await?;
    Ok(Json(records))
}

/// GET /api/occupancy/{camera_id} - recent readings for one camera
async fn list_for_camera(
    State(state): State<Arc<AppState>>,
    Path(camera_id): Path<String>,
) -> Result<Json<Vec<OccupancyRecord>>, ApiError> {
    let records = OccupancyRepo::new(&state.pool)
        .list_for_camera(&camera_id)
        .await?;
    Ok(Json(records))
}

/// GET /api/occupancy/summary - aggregate over all stored readings
async fn summary(State(state): State<Arc<AppState>>) -> Result<Json<OccupancySummary>, ApiError> {
    let summary = OccupancyRepo::new(&state.pool).summary().await?;
    Ok(Json(summary))
}

/// Occupancy routes
///
/// The literal `summary` segment must win over the `{camera_id}` capture;
/// the router matches static segments ahead of captures, and registering
/// `summary` explicitly keeps that requirement visible.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/occupancy", get(list_recent).post(create))
        .route("/api/occupancy/summary", get(summary))
        .route("/api/occupancy/{camera_id}", get(list_for_camera))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_absent_fields() {
        let req: CreateOccupancyRequest = serde_json::from_str("{}").unwrap();
        assert!(req.camera_id.is_none());
        assert!(req.occupancy.is_none());
        assert!(req.capacity.is_none());
    }

    #[test]
    fn request_deserializes_full_body() {
        let req: CreateOccupancyRequest =
            serde_json::from_str(r#"{"camera_id":"cam1","occupancy":3,"capacity":10}"#).unwrap();
        assert_eq!(req.camera_id.as_deref(), Some("cam1"));
        assert_eq!(req.occupancy, Some(3));
        assert_eq!(req.capacity, Some(10));
    }
}
