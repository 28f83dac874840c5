//! Shared constants and calendar conversions.
//!
//! The simulation epoch is a plain `f64` counting days since J2000, which this
//! crate anchors at 2000-01-01 00:00 UTC (calendar midnight, not the 12:00 TT
//! astronomical definition). Calendar math is proleptic Gregorian.

use std::fmt;
use std::str::FromStr;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Days per Julian century (the unit of every secular rate).
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average Gregorian month length in days.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// 2000-01-01 00:00:00 UTC as a Unix timestamp.
pub const J2000_MIDNIGHT_UNIX: i64 = 946_684_800;

/// Days between 1970-01-01 and 2000-01-01.
const UNIX_DAYS_AT_J2000: i64 = 10_957;

/// Largest day offset (either sign) converted to a calendar date.
///
/// About 1.9 billion years, inside the `i32` year range. Epochs beyond it read
/// as the limiting date.
pub const CALENDAR_DAY_LIMIT: i64 = 700_000_000_000;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Convert a day offset from J2000 into Julian centuries.
pub fn centuries_since_j2000(days: f64) -> f64 {
    days / DAYS_PER_CENTURY
}

/// Convert a Unix timestamp (seconds, fractional allowed) to days since J2000.
pub fn unix_to_j2000_days(unix_seconds: f64) -> f64 {
    (unix_seconds - J2000_MIDNIGHT_UNIX as f64) / SECONDS_PER_DAY
}

/// Current wall-clock instant as days since J2000.
///
/// A system clock set before 1970 is treated as the Unix epoch.
pub fn current_j2000_days() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let unix_now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    unix_to_j2000_days(unix_now)
}

/// Errors produced when reading a calendar date from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("expected a date formatted as YYYY-MM-DD, got {0:?}")]
    Format(String),

    #[error("month {0} is out of range (1-12)")]
    Month(u32),

    #[error("day {day} is out of range for {year:04}-{month:02}")]
    Day { year: i32, month: u32, day: u32 },
}

/// A proleptic Gregorian calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// The J2000 reference date.
    pub const J2000: CalendarDate = CalendarDate {
        year: 2000,
        month: 1,
        day: 1,
    };

    /// Build a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::Month(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::Day { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Whole days from 2000-01-01 to this date (negative before J2000).
    pub fn days_since_j2000(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) - UNIX_DAYS_AT_J2000
    }

    /// The calendar date containing the given epoch.
    ///
    /// Fractional days are floored, so `-0.25` is 1999-12-31. Offsets past
    /// [`CALENDAR_DAY_LIMIT`] saturate at the limit.
    pub fn from_j2000_days(days: f64) -> Self {
        let whole = if days.is_finite() { days.floor() as i64 } else { 0 };
        let whole = whole.clamp(-CALENDAR_DAY_LIMIT, CALENDAR_DAY_LIMIT);
        let (year, month, day) = civil_from_days(whole.saturating_add(UNIX_DAYS_AT_J2000));
        Self { year, month, day }
    }

    /// Format as "January 1, 2000".
    pub fn long_form(&self) -> String {
        format!(
            "{} {}, {}",
            MONTH_NAMES[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_err = || DateError::Format(s.to_string());

        // A leading '-' belongs to the year, not a separator.
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format_err());
        };

        let year: i32 = y.parse().map_err(|_| format_err())?;
        let month: u32 = m.parse().map_err(|_| format_err())?;
        let day: u32 = d.parse().map_err(|_| format_err())?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let year_of_era = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let day_of_year = (153 * mp + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146097 + day_of_era - 719468
}

/// Convert days since 1970-01-01 to year, month, day
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
    let day_of_era = z - era * 146097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);

    let year = year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (year, month, day)
}
