//! Database layer: pool construction, schema, repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};

use sqlx::PgPool;

/// Startup diagnostic: one connect-and-release round trip plus the
/// idempotent schema pass. Callers treat failure as non-fatal so an
/// unreachable store never blocks the listener from starting.
pub async fn prepare(pool: &PgPool) -> Result<(), sqlx::Error> {
    ping(pool).await?;
    migrations::run(pool).await
}
