//! Date and time display utilities.
//!
//! Wrapper types that format the crate's jiff values consistently:
//! timezone-aware audit timestamps, compact month-day dates, and clock
//! times with a placeholder for missing values.

use std::fmt;

use jiff::civil::{Date, Time};
use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting
/// via the `Display` trait.
///
/// The display format follows the pattern `YYYY-MM-DD HH:MM:SS TZ` with
/// zero-padded components and the local timezone abbreviation.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Compact month-day rendering for schedule chips, e.g. `Aug 05`.
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %d"))
    }
}

/// Clock time that renders `--:--` when the value is absent.
///
/// Missing times are a display concern, never an error: the underlying
/// stored field simply stays empty.
pub struct ClockTime<'a>(pub Option<&'a Time>);

impl<'a> fmt::Display for ClockTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(time) => write!(f, "{}", time.strftime("%H:%M")),
            None => write!(f, "--:--"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_short_date_format() {
        assert_eq!(format!("{}", ShortDate(date(2026, 8, 5))), "Aug 05");
        assert_eq!(format!("{}", ShortDate(date(2026, 12, 31))), "Dec 31");
    }

    #[test]
    fn test_clock_time_present() {
        let t = time(9, 5, 0, 0);
        assert_eq!(format!("{}", ClockTime(Some(&t))), "09:05");
    }

    #[test]
    fn test_clock_time_missing_placeholder() {
        assert_eq!(format!("{}", ClockTime(None)), "--:--");
    }
}
