//! Ayanamsha: the offset between the tropical and sidereal zodiacs.
//!
//! As the equinox precesses westward the ayanamsha grows. This module uses a
//! single linear model anchored at 1900-Jan-0.5 (JD 2415020.0):
//!
//! ```text
//! ayanamsha(JD) = 22.4604889 + (50.2388475 / 3600) × (JD − 2415020.0) / 365.25
//! ```
//!
//! i.e. 22° 27' 37.76" at the epoch, advancing 50.2388475" per Julian year.

use crate::util::normalize_360;

/// Reference epoch of the model (1900-Jan-0.5).
pub const AYANAMSHA_EPOCH_JD: f64 = 2_415_020.0;

/// Ayanamsha at the reference epoch, in degrees.
pub const AYANAMSHA_AT_EPOCH_DEG: f64 = 22.460_488_9;

/// Annual precession rate in arcseconds.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.238_847_5;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Label reported alongside the ayanamsha value.
pub const AYANAMSHA_LABEL: &str = "Surya Siddhanta";

/// Ayanamsha in degrees at the given Julian Day.
///
/// Linear in JD, so strictly increasing.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - AYANAMSHA_EPOCH_JD) / DAYS_PER_JULIAN_YEAR;
    AYANAMSHA_AT_EPOCH_DEG + (PRECESSION_ARCSEC_PER_YEAR / 3600.0) * years
}

/// Sidereal longitude from a tropical longitude and a precomputed ayanamsha.
///
/// Result in [0, 360).
pub fn sidereal_longitude(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}

/// Convert a tropical longitude to sidereal at the given Julian Day.
pub fn tropical_to_sidereal(tropical_deg: f64, jd: f64) -> f64 {
    sidereal_longitude(tropical_deg, ayanamsha_deg(jd))
}
