//! buswatch-server: bus-occupancy telemetry over HTTP
//!
//! Records occupancy readings (camera id, detected count, capacity) in
//! PostgreSQL and serves read, aggregate, and delete queries as JSON.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
