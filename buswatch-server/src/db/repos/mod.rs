//! Repository implementations for database access
//!
//! Every operation is a single parameterized statement on a borrowed
//! pool connection; writes use RETURNING so the handler echoes exactly
//! what was stored.

pub mod occupancy;

pub use occupancy::{DbError, OccupancyRecord, OccupancyRepo, OccupancySummary};
