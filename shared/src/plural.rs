//! Czech grammatical-number agreement for availability labels
//!
//! Czech uses three forms: singular (1), paucal (2-4), plural (5+).
//! Zero is never rendered; fully booked slots are filtered out before
//! the label is built.

/// Format a remaining-capacity count as a Czech label
///
/// # Examples
///
/// ```
/// use shared::plural::format_available;
///
/// assert_eq!(format_available(1), "1 volné místo");
/// assert_eq!(format_available(3), "3 volná místa");
/// assert_eq!(format_available(7), "7 volných míst");
/// ```
pub fn format_available(count: u32) -> String {
    match count {
        1 => "1 volné místo".to_string(),
        2..=4 => format!("{} volná místa", count),
        _ => format!("{} volných míst", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(format_available(1), "1 volné místo");
    }

    #[test]
    fn test_paucal() {
        assert_eq!(format_available(2), "2 volná místa");
        assert_eq!(format_available(3), "3 volná místa");
        assert_eq!(format_available(4), "4 volná místa");
    }

    #[test]
    fn test_plural() {
        assert_eq!(format_available(5), "5 volných míst");
        assert_eq!(format_available(12), "12 volných míst");
        assert_eq!(format_available(100), "100 volných míst");
    }
}
