//! Wall clock display helpers

use core::fmt::Write;

use heapless::String;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Time of day shown on the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Create a time, wrapping out-of-range values
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    /// Local time from a Unix timestamp plus a zone offset in seconds
    pub fn from_unix(unix_s: u64, offset_s: i32) -> Self {
        let local = (unix_s as i64 + offset_s as i64).rem_euclid(SECONDS_PER_DAY);
        Self {
            hour: (local / 3600) as u8,
            minute: (local % 3600 / 60) as u8,
        }
    }

    /// Five-character label, `HH:MM` or `HH MM` with the separator hidden
    pub fn label(&self, separator: bool) -> String<5> {
        let mut label = String::new();
        let sep = if separator { ':' } else { ' ' };
        // Always fits: two digits, separator, two digits
        let _ = write!(label, "{:02}{}{:02}", self.hour, sep, self.minute);
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let time = ClockTime::new(7, 5);
        assert_eq!(time.label(true).as_str(), "07:05");
        assert_eq!(time.label(false).as_str(), "07 05");
    }

    #[test]
    fn test_from_unix_with_offset() {
        // 2017-06-01 12:34:56 UTC
        let ts = 1_496_320_496;
        assert_eq!(ClockTime::from_unix(ts, 0), ClockTime::new(12, 34));
        assert_eq!(ClockTime::from_unix(ts, 7200), ClockTime::new(14, 34));
        assert_eq!(ClockTime::from_unix(ts, -13 * 3600), ClockTime::new(23, 34));
    }

    #[test]
    fn test_new_wraps() {
        assert_eq!(ClockTime::new(25, 61), ClockTime::new(1, 1));
    }
}
