//! Julian Day ↔ Gregorian calendar conversion.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! The Gregorian century correction is always applied (proleptic
//! Gregorian calendar); the 1582 calendar reform is not modelled.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `1.5` = 1st of the month at 12:00).
///
/// ```text
/// if month <= 2 { y -= 1; m += 12 }
/// a  = floor(y / 100)
/// b  = 2 - a + floor(a / 4)
/// JD = floor(365.25 (y + 4716)) + floor(30.6001 (m + 1)) + day + b - 1524.5
/// ```
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Gregorian calendar date for a Julian Day.
///
/// Returns `(year, month, day_with_fraction)`. Inverse of [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn epoch_1900() {
        // 1900-Jan-0.5 is JD 2415020.0; Jan 1 0h is half a day later
        assert_eq!(calendar_to_jd(1900, 1, 0.5), 2_415_020.0);
        assert_eq!(calendar_to_jd(1900, 1, 1.0), 2_415_020.5);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn february_shift() {
        // January goes through the month + 12 branch
        let jd = calendar_to_jd(1988, 1, 27.0);
        assert!((jd - 2_447_187.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn roundtrip() {
        for &(y, m, d) in &[(2000, 1, 1.5), (1957, 10, 4.81), (2024, 2, 29.25), (1900, 12, 31.0)] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y2, m2), (y, m));
            assert!((d2 - d).abs() < 1e-6, "{y}-{m}-{d}: got day {d2}");
        }
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_JULIAN_CENTURY) - 1.0).abs() < 1e-15);
    }
}
