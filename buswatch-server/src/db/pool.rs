//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created
//! lazily: connections are only opened on first use, so a store that is
//! down at startup degrades individual requests instead of the process.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a lazy PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `tls_no_verify` - accept untrusted/self-signed server certificates.
///   When set, the connection still encrypts but skips peer verification;
///   a warning is logged. When unset, the connection string's own
///   `sslmode` is passed through untouched.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn create_pool(database_url: &str, tls_no_verify: bool) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, tls_no_verify, DEFAULT_MAX_CONNECTIONS)
}

/// Create a lazy PostgreSQL connection pool with a custom connection limit.
pub fn create_pool_with_options(
    database_url: &str,
    tls_no_verify: bool,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;

    if tls_no_verify {
        tracing::warn!(
            "TLS certificate verification disabled: connections are encrypted \
             but the server identity is not checked"
        );
        // Require = encrypt without verifying the peer certificate.
        options = options.ssl_mode(PgSslMode::Require);
    }

    Ok(PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options))
}

/// One connect-and-release round trip to confirm the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
