//! Availability read models
//!
//! Two views over the same data: the admin view carries reservation
//! names, the public view only remaining counts with a pluralized
//! Czech label. Slots without a stored capacity row fall back to
//! [`DEFAULT_CAPACITY`](super::slot::DEFAULT_CAPACITY).

use serde::{Deserialize, Serialize};

use super::slot::DEFAULT_CAPACITY;
use crate::plural::format_available;

/// Admin view of one grid slot: capacity plus reserved names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDetail {
    pub time: String,
    pub capacity: i32,
    /// Names sorted ascending, case-sensitive ordinal order
    pub names: Vec<String>,
}

impl SlotDetail {
    /// Remaining capacity; negative when overbooked (orphan capacity edits)
    pub fn available(&self) -> i32 {
        self.capacity - self.names.len() as i32
    }
}

/// Public view of one open slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSummary {
    pub time: String,
    pub available: i32,
    /// Pluralized Czech availability text, e.g. "2 volná místa"
    pub label: String,
}

/// Public availability response: open slot list, or the closed notice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PublicAvailability {
    Open { slots: Vec<SlotSummary> },
    Closed { notice: Option<String> },
}

/// Build the public summary from the admin view
///
/// Slots with no remaining capacity are omitted entirely.
pub fn summarize(details: &[SlotDetail]) -> Vec<SlotSummary> {
    details
        .iter()
        .filter(|d| d.available() > 0)
        .map(|d| SlotSummary {
            time: d.time.clone(),
            available: d.available(),
            label: format_available(d.available() as u32),
        })
        .collect()
}

/// Capacity for a slot that may have no stored row
pub fn capacity_or_default(capacity: Option<i32>) -> i32 {
    capacity.unwrap_or(DEFAULT_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(time: &str, capacity: i32, names: &[&str]) -> SlotDetail {
        SlotDetail {
            time: time.to_string(),
            capacity,
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_summarize_filters_full_slots() {
        let details = vec![
            detail("09:00", 1, &["Alice"]),
            detail("09:15", 2, &["Bob"]),
            detail("09:30", 6, &[]),
        ];
        let summary = summarize(&details);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].time, "09:15");
        assert_eq!(summary[0].available, 1);
        assert_eq!(summary[0].label, "1 volné místo");
        assert_eq!(summary[1].time, "09:30");
        assert_eq!(summary[1].available, 6);
        assert_eq!(summary[1].label, "6 volných míst");
    }

    #[test]
    fn test_summarize_omits_overbooked_slots() {
        let details = vec![detail("09:00", 1, &["Alice", "Bob"])];
        assert!(summarize(&details).is_empty());
    }

    #[test]
    fn test_capacity_or_default() {
        assert_eq!(capacity_or_default(Some(4)), 4);
        assert_eq!(capacity_or_default(None), 6);
    }
}
