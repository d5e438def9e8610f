//! Greenwich Mean Sidereal Time and Local Sidereal Time, in degrees.
//!
//! GMST uses the degree-valued polynomial of Meeus, "Astronomical
//! Algorithms" (2nd ed), Eq. 12.4, evaluated directly on the UTC Julian Day
//! (UT1 − UTC is neglected).

use crate::julian::{J2000_JD, jd_to_centuries};

fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// ```text
/// GMST = 280.46061837 + 360.98564736629 (JD − 2451545.0)
///        + 0.000387933 T² − T³ / 38710000
/// ```
pub fn gmst_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    wrap_360(280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t2
        - t3 / 38_710_000.0)
}

/// Local Sidereal Time from GMST and observer east longitude, both in degrees.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    wrap_360(gmst_deg + longitude_east_deg)
}
