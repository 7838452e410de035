//! Timestamp to `YYYY-MM-DD HH:mm:ss` formatting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Timelike, Utc};

use crate::error::{Result, UtilError};

/// Time zone used to render wall-clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The system time zone
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    /// Zone with a fixed offset east of UTC, in seconds.
    pub fn fixed(offset_seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(offset_seconds).map(Self::Fixed)
    }

    /// Wall-clock date and time of `instant` in this zone.
    pub fn localize(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }
}

impl FromStr for Zone {
    type Err = UtilError;

    /// Accepts `local`, `utc`, `Z`, or an offset such as `+02:00` / `-0530`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || UtilError::Config(format!("invalid UTC offset: {}", s));
        if s.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Self::fixed(0).ok_or_else(invalid);
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
        let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
        Self::fixed(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Interpret `timestamp` as seconds or milliseconds since the epoch.
///
/// Values whose decimal form is longer than 10 characters are milliseconds.
pub fn timestamp_to_utc(timestamp: i64) -> Result<DateTime<Utc>> {
    let millis = if timestamp.to_string().len() > 10 {
        Some(timestamp)
    } else {
        timestamp.checked_mul(1000)
    };
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or(UtilError::InvalidTimestamp(timestamp))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimeFormat {
    /// Date only
    Short,
    /// Date and time
    #[default]
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeOptions {
    pub format: DateTimeFormat,
    pub date_separator: String,
    pub time_separator: String,
    pub zone: Zone,
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        Self {
            format: DateTimeFormat::Long,
            date_separator: "-".to_string(),
            time_separator: ":".to_string(),
            zone: Zone::Local,
        }
    }
}

/// Format `timestamp` as `YYYY-MM-DD` or `YYYY-MM-DD HH:mm:ss`.
pub fn convert_timestamp_to_date_time(timestamp: i64, options: &DateTimeOptions) -> Result<String> {
    let local = options.zone.localize(timestamp_to_utc(timestamp)?);

    let date = [
        local.year().to_string(),
        format!("{:02}", local.month()),
        format!("{:02}", local.day()),
    ]
    .join(&options.date_separator);

    match options.format {
        DateTimeFormat::Short => Ok(date),
        DateTimeFormat::Long => {
            let time = [
                format!("{:02}", local.hour()),
                format!("{:02}", local.minute()),
                format!("{:02}", local.second()),
            ]
            .join(&options.time_separator);
            Ok(format!("{} {}", date, time))
        }
    }
}
