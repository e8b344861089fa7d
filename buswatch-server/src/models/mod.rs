//! Domain models and boundary validation

pub mod occupancy;
pub mod validation;

pub use occupancy::NewReading;
pub use validation::ValidationError;
