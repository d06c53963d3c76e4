//! Calendar date helpers for stamping generated documents.
//!
//! Only UTC days are needed, so this avoids pulling in a full date library.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86400;

/// A UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Today's date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self::from_unix_seconds(current_unix_timestamp())
    }

    /// Convert seconds since the Unix epoch to a UTC date.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_unix_seconds(secs: u64) -> Self {
        let (year, month, day) = days_to_ymd(secs / SECONDS_PER_DAY);

        // year <= 9999 for any realistic clock, month 1-12, day 1-31
        Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Seconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn current_unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Convert days since Unix epoch (1970-01-01) to (year, month, day).
#[allow(clippy::cast_possible_truncation)]
const fn days_to_ymd(days: u64) -> (u32, u32, u32) {
    // Howard Hinnant's civil_from_days
    // http://howardhinnant.github.io/date_algorithms.html
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };

    (y as u32, m as u32, d as u32)
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
