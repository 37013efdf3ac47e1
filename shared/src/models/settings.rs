//! Persisted settings records
//!
//! Both records live in the key-value `settings` table and are read
//! with defaults when absent, overwritten wholesale on admin save, and
//! deleted on full reset.

use serde::{Deserialize, Serialize};

/// Default public notice shown while booking is disabled
pub const DEFAULT_CLOSED_NOTICE: &str = "Rezervace jsou momentálně uzavřeny.";

/// Booking configuration (settings key `config`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Gates the public reservation flow
    pub reservations_enabled: bool,
    /// Notice shown to the public while booking is disabled
    pub closed_notice_text: String,
    /// Suppress the closed notice entirely
    pub hide_closed_notice: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reservations_enabled: false,
            closed_notice_text: DEFAULT_CLOSED_NOTICE.to_string(),
            hide_closed_notice: false,
        }
    }
}

/// Time range settings (settings key `time_range`)
///
/// Changing these regenerates the slot set; existing reservations are
/// never deleted, even when their label falls outside the new grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRangeSettings {
    /// Grid start, `HH:MM`
    pub start_time: String,
    /// Grid end, `HH:MM` (inclusive when a step lands on it)
    pub end_time: String,
    /// Step in minutes, 1..=60
    pub interval: u32,
}

impl Default for TimeRangeSettings {
    fn default() -> Self {
        Self {
            start_time: "09:00".to_string(),
            end_time: "16:30".to_string(),
            interval: 15,
        }
    }
}
