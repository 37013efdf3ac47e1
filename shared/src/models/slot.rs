//! Time slot model

use serde::{Deserialize, Serialize};

/// Capacity assigned to slots that have no stored row
pub const DEFAULT_CAPACITY: i32 = 6;

/// A bookable time-of-day label with an associated capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Slot {
    /// Slot label in `HH:MM` format, unique
    pub time: String,
    pub capacity: i32,
}

/// Capacity update payload (admin endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityUpdate {
    pub capacity: i32,
}
