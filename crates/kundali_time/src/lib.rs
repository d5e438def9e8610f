//! Civil time, Julian Day and sidereal time for natal-chart computation.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion
//! - Local civil time + UTC offset → UTC conversion
//! - An `Instant` type pairing a UTC timestamp with its Julian Day
//! - Greenwich mean and local sidereal time
//!
//! No leap-second or UT1 corrections are applied: the Julian Day is computed
//! directly from the UTC calendar instant.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

use serde::Serialize;

pub use civil::{LocalDateTime, UtcOffset};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::UtcTime;

/// A UTC instant together with its Julian Day.
///
/// This is the time value every positional model consumes. It is built
/// once per chart and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Instant {
    utc: UtcTime,
    jd: f64,
}

impl Instant {
    /// Create an instant from a UTC calendar time.
    pub fn from_utc(utc: UtcTime) -> Self {
        Self {
            utc,
            jd: utc.to_jd(),
        }
    }

    /// Create an instant from local civil time and its UTC offset.
    pub fn from_local(local: &LocalDateTime, offset: UtcOffset) -> Result<Self, TimeError> {
        Ok(Self::from_utc(local.to_utc(offset)?))
    }

    /// The UTC calendar timestamp.
    pub fn utc(&self) -> UtcTime {
        self.utc
    }

    /// Julian Day (UTC).
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0.
    pub fn t_centuries(&self) -> f64 {
        jd_to_centuries(self.jd)
    }
}
