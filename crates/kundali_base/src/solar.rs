//! Low-precision solar longitude.
//!
//! Geometric mean longitude plus the equation of center (Meeus,
//! "Astronomical Algorithms" 2nd ed, Chapter 25, low-accuracy method).
//! Accuracy is of order 0.01°, ample for sign placement.

use kundali_time::jd_to_centuries;

use crate::util::normalize_360;

/// Geometric mean longitude of the Sun, degrees [0, 360).
///
/// `L0 = 280.46646 + 36000.76983 T + 0.0003032 T²`
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Mean anomaly of the Sun, degrees [0, 360).
///
/// `M = 357.52911 + 35999.05029 T − 0.0001537 T²`
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Eccentricity of Earth's orbit (dimensionless).
pub fn earth_eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Sun's equation of center in degrees.
pub fn sun_equation_of_center_deg(t: f64) -> f64 {
    let m = sun_mean_anomaly_deg(t).to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Tropical (true) ecliptic longitude of the Sun at a Julian Day, degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    normalize_360(sun_mean_longitude_deg(t) + sun_equation_of_center_deg(t))
}
