//! Occupancy repository
//!
//! Single-table CRUD: insert with RETURNING, recency-ordered lists with a
//! fixed cap, one full-scan aggregate, delete-by-id.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::NewReading;

/// Fixed cap for list queries. No pagination beyond this.
const RECENT_LIMIT: i64 = 50;

/// Occupancy record from the database
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct OccupancyRecord {
    pub id: i64,
    pub camera_id: String,
    pub occupancy: i32,
    pub capacity: i32,
    pub timestamp: DateTime<Utc>,
}

/// Point-in-time aggregate over all stored records.
///
/// `avg_occupancy` and `latest_timestamp` are NULL on an empty table;
/// that store behavior is surfaced as JSON null, not coerced to zero.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct OccupancySummary {
    pub total_records: i64,
    pub avg_occupancy: Option<f64>,
    pub latest_timestamp: Option<DateTime<Utc>>,
    pub unique_cameras: i64,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Occupancy repository
pub struct OccupancyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OccupancyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated reading, returning the stored row with its
    /// store-assigned id and timestamp.
    pub async fn insert(&self, reading: NewReading) -> Result<OccupancyRecord, DbError> {
        let record = sqlx::query_as::<_, OccupancyRecord>(
            r#"
            INSERT INTO occupancy (camera_id, occupancy, capacity)
            VALUES ($1, $2, $3)
            RETURNING id, camera_id, occupancy, capacity, timestamp
            "#,
        )
        .bind(&reading.camera_id)
        .bind(reading.occupancy)
        .bind(reading.capacity)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// Most recent records across all cameras, newest first.
    pub async fn list_recent(&self) -> Result<Vec<OccupancyRecord>, DbError> {
        let records = sqlx::query_as::<_, OccupancyRecord>(
            r#"
            SELECT id, camera_id, occupancy, capacity, timestamp
            FROM occupancy
            ORDER BY timestamp DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Most recent records for one camera, newest first.
    ///
    /// An unknown camera id yields an empty list, not an error.
    pub async fn list_for_camera(&self, camera_id: &str) -> Result<Vec<OccupancyRecord>, DbError> {
        let records = sqlx::query_as::<_, OccupancyRecord>(
            r#"
            SELECT id, camera_id, occupancy, capacity, timestamp
            FROM occupancy
            WHERE camera_id = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(camera_id)
        .bind(RECENT_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Full-table aggregate, recomputed per call.
    pub async fn summary(&self) -> Result<OccupancySummary, DbError> {
        let summary = sqlx::query_as::<_, OccupancySummary>(
            r#"
            SELECT
                COUNT(*) AS total_records,
                AVG(occupancy)::float8 AS avg_occupancy,
                MAX(timestamp) AS latest_timestamp,
                COUNT(DISTINCT camera_id) AS unique_cameras
            FROM occupancy
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(summary)
    }

    /// Delete a record by primary key, returning the deleted row.
    pub async fn delete(&self, id: i64) -> Result<OccupancyRecord, DbError> {
        sqlx::query_as::<_, OccupancyRecord>(
            r#"
            DELETE FROM occupancy
            WHERE id = $1
            RETURNING id, camera_id, occupancy, capacity, timestamp
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "occupancy record",
            id: id.to_string(),
        })
    }
}
