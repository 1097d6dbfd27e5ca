//! Millisecond display formatting.

/// Format milliseconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped, so totals past a day keep counting up.
pub fn format_hms(ms: u64) -> String {
    let s = (ms / 1000) % 60;
    let m = (ms / 60_000) % 60;
    let h = ms / 3_600_000;
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_seconds() {
        assert_eq!(format_hms(5000), "00:00:05");
    }

    #[test]
    fn zero() {
        assert_eq!(format_hms(0), "00:00:00");
    }

    #[test]
    fn rolls_minutes_and_hours() {
        assert_eq!(format_hms(61_000), "00:01:01");
        assert_eq!(format_hms(3_600_000), "01:00:00");
        assert_eq!(format_hms(25 * 3_600_000 + 90_000), "25:01:30");
    }

    #[test]
    fn truncates_sub_second() {
        assert_eq!(format_hms(999), "00:00:00");
        assert_eq!(format_hms(1999), "00:00:01");
    }
}
