//! Low-precision lunar longitude.
//!
//! Mean arguments are the quartic polynomials of Meeus, "Astronomical
//! Algorithms" (2nd ed), Chapter 47. The periodic correction keeps only the
//! six largest longitude terms, giving roughly 0.3° accuracy.

use kundali_time::jd_to_centuries;

use crate::solar::sun_mean_anomaly_deg;
use crate::util::normalize_360;

/// Moon's mean longitude L', degrees [0, 360).
pub fn moon_mean_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
    )
}

/// Moon's mean elongation from the Sun D, degrees [0, 360).
pub fn moon_mean_elongation_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
    )
}

/// Moon's mean anomaly M', degrees [0, 360).
pub fn moon_mean_anomaly_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
    )
}

/// Moon's argument of latitude F, degrees [0, 360).
pub fn moon_argument_of_latitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    )
}

/// Six-term periodic correction to the mean longitude, in degrees.
///
/// ```text
///   6.288774 sin M' + 1.274027 sin(2L' − M') + 0.658314 sin 2L'
/// + 0.213618 sin 2M' − 0.185116 sin M☉ − 0.114332 sin 2F
/// ```
pub fn moon_longitude_correction_deg(t: f64) -> f64 {
    let l = moon_mean_longitude_deg(t).to_radians();
    let m = moon_mean_anomaly_deg(t).to_radians();
    let f = moon_argument_of_latitude_deg(t).to_radians();
    let m_sun = sun_mean_anomaly_deg(t).to_radians();

    6.288_774 * m.sin() + 1.274_027 * (2.0 * l - m).sin() + 0.658_314 * (2.0 * l).sin()
        + 0.213_618 * (2.0 * m).sin()
        - 0.185_116 * m_sun.sin()
        - 0.114_332 * (2.0 * f).sin()
}

/// Tropical ecliptic longitude of the Moon at a Julian Day, degrees [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    normalize_360(moon_mean_longitude_deg(t) + moon_longitude_correction_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_arguments_at_j2000() {
        assert!((moon_mean_longitude_deg(0.0) - 218.316_447_7).abs() < 1e-12);
        assert!((moon_mean_elongation_deg(0.0) - 297.850_192_1).abs() < 1e-12);
        assert!((moon_mean_anomaly_deg(0.0) - 134.963_396_4).abs() < 1e-12);
        assert!((moon_argument_of_latitude_deg(0.0) - 93.272_095_0).abs() < 1e-12);
    }

    #[test]
    fn correction_bounded() {
        // Sum of absolute amplitudes ≈ 8.73°
        for i in -100..100 {
            let t = i as f64 * 0.0071;
            let c = moon_longitude_correction_deg(t);
            assert!(c.abs() < 8.75, "t={t}: correction = {c}");
        }
    }

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12.0 TD (JD 2448724.5): λ = 133.162655° (full theory).
        // The truncated series gives 132.6732°.
        let lon = moon_longitude_deg(2_448_724.5);
        assert!((lon - 132.673_2).abs() < 1e-3, "Moon = {lon}");
        assert!((lon - 133.162_655).abs() < 0.6, "Moon = {lon}");
    }

    #[test]
    fn mean_motion_about_13_deg_per_day() {
        let t0 = 0.0;
        let t1 = 1.0 / 36_525.0;
        let diff = normalize_360(moon_mean_longitude_deg(t1) - moon_mean_longitude_deg(t0));
        assert!((diff - 13.176).abs() < 0.01, "daily motion = {diff}");
    }

    #[test]
    fn longitude_range() {
        for &jd in &[2_415_020.0, 2_440_000.5, 2_451_545.0, 2_460_000.5] {
            let lon = moon_longitude_deg(jd);
            assert!((0.0..360.0).contains(&lon), "Moon = {lon}");
        }
    }
}
