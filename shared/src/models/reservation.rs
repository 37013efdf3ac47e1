//! Reservation model

use serde::{Deserialize, Serialize};

/// A named booking against exactly one time slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    /// Slot label in `HH:MM` format
    pub time: String,
}

/// Submit reservation payload (public endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub time: String,
}
