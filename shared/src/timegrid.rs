//! Time-grid generation
//!
//! Derives the ordered set of bookable `HH:MM` labels from a start
//! time, end time and interval. The grid is bounded within one
//! calendar day; ranges that would cross midnight are not generated
//! (`start > end` yields an empty grid).

use chrono::{NaiveTime, Timelike};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::TimeRangeSettings;

/// Parse an `HH:MM` slot label
pub fn parse_label(label: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(label, "%H:%M").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid time label: {label}"),
        )
    })
}

/// Parse a slot label and canonicalize it to zero-padded `HH:MM`
///
/// `%H` tolerates single-digit hours, so "9:00" parses fine but would
/// not match the stored label "09:00"; callers that persist or look up
/// labels go through this instead of [`parse_label`].
pub fn normalize_label(label: &str) -> AppResult<String> {
    let time = parse_label(label)?;
    Ok(format!("{:02}:{:02}", time.hour(), time.minute()))
}

/// Generate the ordered grid of slot labels for a time range
///
/// Starts at `start_time` and steps by `interval` minutes, including
/// every step that lands exactly on or before `end_time`. An interval
/// outside 1..=60 is rejected.
pub fn generate_grid(range: &TimeRangeSettings) -> AppResult<Vec<String>> {
    if range.interval == 0 || range.interval > 60 {
        return Err(AppError::with_message(
            ErrorCode::InvalidTimeRange,
            format!("interval must be 1-60 minutes, got {}", range.interval),
        ));
    }

    let start = parse_label(&range.start_time)?;
    let end = parse_label(&range.end_time)?;

    let start_min = start.hour() * 60 + start.minute();
    let end_min = end.hour() * 60 + end.minute();

    let mut times = Vec::new();
    let mut current = start_min;
    while current <= end_min {
        times.push(format!("{:02}:{:02}", current / 60, current % 60));
        current += range.interval;
    }

    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str, interval: u32) -> TimeRangeSettings {
        TimeRangeSettings {
            start_time: start.to_string(),
            end_time: end.to_string(),
            interval,
        }
    }

    fn grid(start: &str, end: &str, interval: u32) -> Vec<String> {
        generate_grid(&range(start, end, interval)).unwrap()
    }

    #[test]
    fn test_default_range_grid() {
        let labels = generate_grid(&TimeRangeSettings::default()).unwrap();
        assert_eq!(labels.first().map(String::as_str), Some("09:00"));
        assert_eq!(labels.last().map(String::as_str), Some("16:30"));
        // 09:00..=16:30 at 15 min steps
        assert_eq!(labels.len(), 31);
    }

    #[test]
    fn test_grid_steps_are_uniform() {
        let labels = grid("08:00", "10:00", 20);
        for pair in labels.windows(2) {
            let a = parse_label(&pair[0]).unwrap();
            let b = parse_label(&pair[1]).unwrap();
            assert_eq!((b - a).num_minutes(), 20);
        }
    }

    #[test]
    fn test_end_is_inclusive_only_on_exact_step() {
        // 09:00 + n*25 never lands on 10:00; last element is 09:50
        let labels = grid("09:00", "10:00", 25);
        assert_eq!(labels, vec!["09:00", "09:25", "09:50"]);

        let labels = grid("09:00", "10:00", 30);
        assert_eq!(labels, vec!["09:00", "09:30", "10:00"]);
    }

    #[test]
    fn test_start_after_end_is_empty() {
        assert!(grid("16:00", "09:00", 15).is_empty());
    }

    #[test]
    fn test_single_slot_when_start_equals_end() {
        assert_eq!(grid("09:00", "09:00", 15), vec!["09:00"]);
    }

    #[test]
    fn test_invalid_interval_rejected() {
        assert_eq!(
            generate_grid(&range("09:00", "10:00", 0)).unwrap_err().code,
            ErrorCode::InvalidTimeRange
        );
        assert_eq!(
            generate_grid(&range("09:00", "10:00", 61)).unwrap_err().code,
            ErrorCode::InvalidTimeRange
        );
    }

    #[test]
    fn test_malformed_labels_rejected() {
        assert_eq!(
            generate_grid(&range("9 o'clock", "10:00", 15))
                .unwrap_err()
                .code,
            ErrorCode::InvalidFormat
        );
        assert!(parse_label("25:00").is_err());
        assert!(parse_label("09:60").is_err());
    }

    #[test]
    fn test_normalize_pads_single_digit_hour() {
        assert_eq!(normalize_label("9:00").unwrap(), "09:00");
        assert_eq!(normalize_label("09:05").unwrap(), "09:05");
    }

    #[test]
    fn test_normalize_rejects_malformed_labels() {
        assert_eq!(
            normalize_label("half past nine").unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }
}
