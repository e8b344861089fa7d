//! Validation error types

use std::fmt;

/// Validation error for occupancy readings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or empty
    Missing { field: &'static str },

    /// Count field is negative
    Negative { field: &'static str },

    /// Reported occupancy exceeds the configured capacity
    ExceedsCapacity { occupancy: i32, capacity: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::ExceedsCapacity {
                occupancy,
                capacity,
            } => write!(
                f,
                "occupancy {} cannot exceed capacity {}",
                occupancy, capacity
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
