//! Lagna (Ascendant) computation.
//!
//! The rising point of the ecliptic follows from local sidereal time,
//! the mean obliquity of the ecliptic and the observer's latitude:
//!
//! ```text
//! Asc = atan2(sin LST, cos LST · cos ε + tan φ · sin ε)
//! ```
//!
//! Sidereal time comes from the IAU 1982 GMST polynomial in
//! [`kundali_time::gmst_deg`]; UT is taken equal to UTC.

use kundali_time::{gmst_deg, jd_to_centuries, local_sidereal_time_deg};
use serde::Serialize;

use crate::error::VedicError;
use crate::util::normalize_360;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation(
                "latitude must be finite and in [-90, 90]",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation(
                "longitude must be finite and in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// Mean obliquity of the ecliptic in degrees (linear in T).
///
/// `ε = 23.439291 − 0.0130042 T`
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t
}

/// Ascendant longitude from local sidereal time, latitude and obliquity.
///
/// All arguments in degrees. Returns a value in [0, 360).
///
/// Fails with [`VedicError::NumericDegeneracy`] at the poles, where
/// `tan φ` is undefined, and whenever the result is not finite.
pub fn ascendant_from_lst_deg(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<f64, VedicError> {
    if latitude_deg.abs() >= 90.0 {
        return Err(VedicError::NumericDegeneracy(
            "ascendant undefined at latitude ±90°",
        ));
    }
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = f64::atan2(lst.sin(), lst.cos() * eps.cos() + phi.tan() * eps.sin());
    if !asc.is_finite() {
        return Err(VedicError::NumericDegeneracy(
            "ascendant formula produced a non-finite value",
        ));
    }
    Ok(normalize_360(asc.to_degrees()))
}

/// Tropical ecliptic longitude of the Lagna at a Julian Day (UT), degrees [0, 360).
pub fn lagna_longitude_deg(jd: f64, location: &GeoLocation) -> Result<f64, VedicError> {
    let t = jd_to_centuries(jd);
    let lst = local_sidereal_time_deg(gmst_deg(jd), location.longitude_deg);
    ascendant_from_lst_deg(lst, location.latitude_deg, mean_obliquity_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.439_291;

    #[test]
    fn equator_lst_zero_rises_aries() {
        // atan2(0, cos ε) = 0
        let asc = ascendant_from_lst_deg(0.0, 0.0, EPS).unwrap();
        assert!(asc.abs() < 1e-10, "Asc = {asc}");
    }

    #[test]
    fn equator_lst_ninety() {
        // atan2(1, 0) = 90°
        let asc = ascendant_from_lst_deg(90.0, 0.0, EPS).unwrap();
        assert!((asc - 90.0).abs() < 1e-10, "Asc = {asc}");
    }

    #[test]
    fn sweep_covers_full_circle() {
        let mut min_asc = f64::MAX;
        let mut max_asc = f64::MIN;
        for i in 0..360 {
            let asc = ascendant_from_lst_deg(i as f64, 28.6, EPS).unwrap();
            assert!((0.0..360.0).contains(&asc));
            min_asc = min_asc.min(asc);
            max_asc = max_asc.max(asc);
        }
        assert!(min_asc < 3.0, "min_asc = {min_asc}");
        assert!(max_asc > 357.0, "max_asc = {max_asc}");
    }

    #[test]
    fn poles_are_degenerate() {
        for lat in [90.0, -90.0] {
            assert!(matches!(
                ascendant_from_lst_deg(45.0, lat, EPS),
                Err(VedicError::NumericDegeneracy(_))
            ));
        }
    }

    #[test]
    fn near_pole_still_finite() {
        let asc = ascendant_from_lst_deg(45.0, 89.999, EPS).unwrap();
        assert!(asc.is_finite());
    }

    #[test]
    fn obliquity_at_j2000() {
        assert_eq!(mean_obliquity_deg(0.0), 23.439_291);
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(51.5, -0.13).is_ok());
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(matches!(
            GeoLocation::new(90.5, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(matches!(
            GeoLocation::new(0.0, -180.1),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn london_at_j2000() {
        // GMST at J2000 = 280.46061837°, LST = 280.33281837°
        let loc = GeoLocation::new(51.5074, -0.1278).unwrap();
        let asc = lagna_longitude_deg(2_451_545.0, &loc).unwrap();
        assert!((asc - 304.048_096).abs() < 1e-4, "Asc = {asc}");
    }
}
