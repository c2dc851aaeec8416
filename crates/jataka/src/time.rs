//! Birth date/time parsing, fixed UTC offsets and the Julian Day formula.

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const OFFSET_FORMAT: &str = "%:z";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Invalid birth date '{value}': expected YYYY-MM-DD ({message})")]
    InvalidDate { value: String, message: String },
    #[error("Invalid birth time '{value}': expected HH:MM:SS ({message})")]
    InvalidTime { value: String, message: String },
    #[error("Invalid UTC offset '{value}': expected +HH:MM or -HH:MM")]
    InvalidOffset { value: String },
    #[error("Birth time {0} falls outside the supported calendar range")]
    OutOfRange(NaiveDateTime),
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM:SS` clock time.
pub fn parse_birth_datetime(dob: &str, tob: &str) -> Result<NaiveDateTime, TimeError> {
    let date = NaiveDate::parse_from_str(dob.trim(), DATE_FORMAT).map_err(|e| {
        TimeError::InvalidDate {
            value: dob.to_string(),
            message: e.to_string(),
        }
    })?;
    let time = NaiveTime::parse_from_str(tob.trim(), TIME_FORMAT).map_err(|e| {
        TimeError::InvalidTime {
            value: tob.to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(date.and_time(time))
}

/// A fixed offset from UTC, e.g. `+05:30` for Indian Standard Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    seconds: i32,
}

/// Offsets beyond a day are rejected.
const MAX_OFFSET_SECONDS: i32 = 24 * 3600;

impl UtcOffset {
    pub const IST: UtcOffset = UtcOffset { seconds: 5 * 3600 + 30 * 60 };

    pub fn from_seconds(seconds: i32) -> Option<Self> {
        (seconds.abs() < MAX_OFFSET_SECONDS).then_some(UtcOffset { seconds })
    }

    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Subtract the offset from a local wall-clock time to obtain UTC.
    pub fn to_utc(self, local: NaiveDateTime) -> Result<DateTime<Utc>, TimeError> {
        local
            .checked_sub_signed(Duration::seconds(self.seconds as i64))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .ok_or(TimeError::OutOfRange(local))
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        UtcOffset::IST
    }
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    /// Parses `+HH:MM` / `-HH:MM` with chrono's `%:z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidOffset { value: s.to_string() };
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, s.trim(), StrftimeItems::new(OFFSET_FORMAT))
            .map_err(|_| invalid())?;
        let offset = parsed.to_fixed_offset().map_err(|_| invalid())?;
        UtcOffset::from_seconds(offset.local_minus_utc()).ok_or_else(invalid)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.seconds();
        let sign = if secs < 0 { '-' } else { '+' };
        let secs = secs.abs();
        write!(f, "{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
    }
}

/// Decimal hours of the clock time, ignoring sub-second precision.
pub fn decimal_hours(dt: &DateTime<Utc>) -> f64 {
    dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0
}

/// Julian Day for a Gregorian calendar date and decimal hour (Meeus, ch. 7).
pub fn julian_day_from_calendar(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
        + hours / 24.0
}

/// Julian Day (UT) for a UTC instant.
pub fn julian_day(dt: &DateTime<Utc>) -> f64 {
    julian_day_from_calendar(dt.year(), dt.month(), dt.day(), decimal_hours(dt))
}
