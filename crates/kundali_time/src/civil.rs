//! Local civil time at the birth place and its UTC offset.
//!
//! A birth time is recorded on the local clock. The UTC instant is
//! `local − offset`, applied on the civil calendar so that day, month and
//! year roll over correctly.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::Serialize;

use crate::error::TimeError;
use crate::utc_time::UtcTime;

/// A validated UTC offset in hours, east of Greenwich positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct UtcOffset(f64);

impl UtcOffset {
    /// Westernmost civil offset (UTC−12).
    pub const MIN_HOURS: f64 = -12.0;
    /// Easternmost civil offset (UTC+14).
    pub const MAX_HOURS: f64 = 14.0;

    /// UTC itself.
    pub const UTC: Self = Self(0.0);

    /// Validate an offset in hours. Fractional offsets (e.g. +5.5, +5.75)
    /// are accepted.
    pub fn new(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(TimeError::InvalidOffset(hours));
        }
        Ok(Self(hours))
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    /// Offset rounded to whole seconds.
    pub fn seconds(self) -> i64 {
        (self.0 * 3600.0).round() as i64
    }
}

/// Local civil date/time components as read from the birth-place clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl LocalDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Validate the components and build a chrono timestamp.
    fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        if !self.second.is_finite() {
            return Err(TimeError::NonFinite("second"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!(
                "second {} outside [0, 60)",
                self.second
            )));
        }
        let whole = self.second.floor();
        let nanos = (((self.second - whole) * 1e9).round() as u32).min(999_999_999);

        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos))
            .ok_or_else(|| TimeError::InvalidDate(self.to_string()))
    }

    /// Convert to UTC by subtracting the offset.
    pub fn to_utc(&self, offset: UtcOffset) -> Result<UtcTime, TimeError> {
        let local = self.to_naive()?;
        let shift = TimeDelta::try_seconds(offset.seconds())
            .ok_or(TimeError::InvalidOffset(offset.hours()))?;
        let utc = local
            .checked_sub_signed(shift)
            .ok_or_else(|| TimeError::InvalidDate(format!("{self} shifted by {shift}")))?;

        Ok(UtcTime::new(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second() as f64 + utc.nanosecond() as f64 / 1e9,
        ))
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        )
    }
}

/// Accepted layouts for `LocalDateTime::from_str`.
const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl FromStr for LocalDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss[.fff]]` (a space may replace the `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::from)
            .ok_or_else(|| TimeError::InvalidDate(format!("cannot parse '{s}'")))
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_bounds() {
        assert!(UtcOffset::new(-12.0).is_ok());
        assert!(UtcOffset::new(14.0).is_ok());
        assert!(UtcOffset::new(5.5).is_ok());
        assert_eq!(UtcOffset::new(-12.5), Err(TimeError::InvalidOffset(-12.5)));
        assert_eq!(UtcOffset::new(14.5), Err(TimeError::InvalidOffset(14.5)));
        assert!(UtcOffset::new(f64::NAN).is_err());
        assert!(UtcOffset::new(f64::INFINITY).is_err());
    }

    #[test]
    fn offset_seconds() {
        assert_eq!(UtcOffset::new(5.5).unwrap().seconds(), 19_800);
        assert_eq!(UtcOffset::new(-3.0).unwrap().seconds(), -10_800);
        assert_eq!(UtcOffset::new(5.75).unwrap().seconds(), 20_700);
    }

    #[test]
    fn zero_offset_is_identity() {
        let local = LocalDateTime::new(2000, 1, 1, 12, 0, 0.0);
        let utc = local.to_utc(UtcOffset::UTC).unwrap();
        assert_eq!(utc, UtcTime::new(2000, 1, 1, 12, 0, 0.0));
    }

    #[test]
    fn east_offset_rolls_back_a_year() {
        // 00:30 on New Year's Day in Moscow (+3) is still the old year in UTC
        let local = LocalDateTime::new(2000, 1, 1, 0, 30, 0.0);
        let utc = local.to_utc(UtcOffset::new(3.0).unwrap()).unwrap();
        assert_eq!(utc, UtcTime::new(1999, 12, 31, 21, 30, 0.0));
    }

    #[test]
    fn west_offset_rolls_forward() {
        let local = LocalDateTime::new(2024, 2, 28, 20, 0, 0.0);
        let utc = local.to_utc(UtcOffset::new(-5.0).unwrap()).unwrap();
        assert_eq!(utc, UtcTime::new(2024, 2, 29, 1, 0, 0.0));
    }

    #[test]
    fn fractional_seconds_preserved() {
        let local = LocalDateTime::new(2010, 6, 15, 8, 15, 30.25);
        let utc = local.to_utc(UtcOffset::UTC).unwrap();
        assert!((utc.second - 30.25).abs() < 1e-9, "second = {}", utc.second);
    }

    #[test]
    fn last_instant_of_day_displays_as_next_midnight() {
        let local = LocalDateTime::new(2000, 1, 1, 23, 59, 59.999_999_999_99);
        let utc = local.to_utc(UtcOffset::UTC).unwrap();
        assert_eq!(utc.to_string(), "2000-01-02T00:00:00Z");
    }

    #[test]
    fn impossible_date_rejected() {
        let local = LocalDateTime::new(2023, 2, 29, 12, 0, 0.0);
        assert!(matches!(
            local.to_utc(UtcOffset::UTC),
            Err(TimeError::InvalidDate(_))
        ));
        let local = LocalDateTime::new(2023, 13, 1, 12, 0, 0.0);
        assert!(local.to_utc(UtcOffset::UTC).is_err());
        let local = LocalDateTime::new(2023, 1, 1, 24, 0, 0.0);
        assert!(local.to_utc(UtcOffset::UTC).is_err());
    }

    #[test]
    fn non_finite_second_rejected() {
        let local = LocalDateTime::new(2023, 1, 1, 12, 0, f64::NAN);
        assert_eq!(
            local.to_utc(UtcOffset::UTC),
            Err(TimeError::NonFinite("second"))
        );
    }

    #[test]
    fn parse_variants() {
        let a: LocalDateTime = "1990-07-04T06:45:10".parse().unwrap();
        assert_eq!(a, LocalDateTime::new(1990, 7, 4, 6, 45, 10.0));
        let b: LocalDateTime = "1990-07-04 06:45".parse().unwrap();
        assert_eq!(b, LocalDateTime::new(1990, 7, 4, 6, 45, 0.0));
        let c: LocalDateTime = "1990-07-04T06:45:10.5".parse().unwrap();
        assert!((c.second - 10.5).abs() < 1e-9);
    }

    #[test]
    fn parse_garbage_rejected() {
        assert!("not a date".parse::<LocalDateTime>().is_err());
        assert!("1990-02-30T06:45".parse::<LocalDateTime>().is_err());
    }
}
