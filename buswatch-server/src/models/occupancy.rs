//! Occupancy reading input model
//!
//! `NewReading` is the validated form of a POST body. Validation order
//! matches the API contract: missing fields first, then value ranges,
//! then the occupancy-vs-capacity rule.

use super::ValidationError;

/// A validated occupancy reading, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReading {
    pub camera_id: String,
    pub occupancy: i32,
    pub capacity: i32,
}

impl NewReading {
    /// Validate raw request fields into a reading.
    ///
    /// - `camera_id` must be present and non-empty
    /// - `occupancy` and `capacity` must be present and non-negative
    /// - `occupancy` must not exceed `capacity`
    pub fn new(
        camera_id: Option<String>,
        occupancy: Option<i32>,
        capacity: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let camera_id = match camera_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(ValidationError::Missing { field: "camera_id" }),
        };
        let occupancy = occupancy.ok_or(ValidationError::Missing { field: "occupancy" })?;
        let capacity = capacity.ok_or(ValidationError::Missing { field: "capacity" })?;

        if occupancy < 0 {
            return Err(ValidationError::Negative { field: "occupancy" });
        }
        if capacity < 0 {
            return Err(ValidationError::Negative { field: "capacity" });
        }

        if occupancy > capacity {
            return Err(ValidationError::ExceedsCapacity {
                occupancy,
                capacity,
            });
        }

        Ok(Self {
            camera_id,
            occupancy,
            capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_reading() {
        let reading = NewReading::new(Some("cam1".into()), Some(3), Some(10)).unwrap();
        assert_eq!(reading.camera_id, "cam1");
        assert_eq!(reading.occupancy, 3);
        assert_eq!(reading.capacity, 10);
    }

    #[test]
    fn accepts_full_bus() {
        assert!(NewReading::new(Some("cam1".into()), Some(10), Some(10)).is_ok());
    }

    #[test]
    fn rejects_missing_camera_id() {
        let err = NewReading::new(None, Some(3), Some(10)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "camera_id" });
    }

    #[test]
    fn rejects_empty_camera_id() {
        let err = NewReading::new(Some("   ".into()), Some(3), Some(10)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "camera_id" });
    }

    #[test]
    fn rejects_missing_occupancy() {
        let err = NewReading::new(Some("cam1".into()), None, Some(10)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "occupancy" });
    }

    #[test]
    fn rejects_missing_capacity() {
        let err = NewReading::new(Some("cam1".into()), Some(3), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "capacity" });
    }

    #[test]
    fn rejects_negative_counts() {
        let err = NewReading::new(Some("cam1".into()), Some(-1), Some(10)).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "occupancy" });

        let err = NewReading::new(Some("cam1".into()), Some(0), Some(-5)).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "capacity" });
    }

    #[test]
    fn rejects_occupancy_over_capacity() {
        let err = NewReading::new(Some("cam1".into()), Some(10), Some(5)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ExceedsCapacity {
                occupancy: 10,
                capacity: 5
            }
        );
    }

    #[test]
    fn missing_field_checked_before_capacity_rule() {
        // A body with no camera_id and an invalid ratio reports the missing
        // field, matching the contract's validation order.
        let err = NewReading::new(None, Some(10), Some(5)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "camera_id" });
    }
}
