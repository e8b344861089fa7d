//! Schema setup for the occupancy table
//!
//! Idempotent CREATE TABLE IF NOT EXISTS pass, run once at startup.
//! The occupancy-vs-capacity rule is enforced at the API boundary, not
//! by a store constraint.

use sqlx::PgPool;

/// Ensure the occupancy table and its indexes exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring occupancy schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS occupancy (
            id BIGSERIAL PRIMARY KEY,
            camera_id TEXT NOT NULL,
            occupancy INTEGER NOT NULL,
            capacity INTEGER NOT NULL,
            timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the two list query paths
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_occupancy_camera ON occupancy(camera_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_occupancy_timestamp ON occupancy(timestamp DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Occupancy schema ready");
    Ok(())
}
