//! Shared utility functions for chart calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that
/// case folds back to 0 so the half-open range always holds.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn normalize_idempotent() {
        for &x in &[-1e6, -720.5, -1e-13, 0.0, 12.3456, 359.999_999_999, 1e9] {
            let once = normalize_360(x);
            assert!((0.0..360.0).contains(&once), "x={x}: {once}");
            assert_eq!(normalize_360(once), once, "x={x}");
        }
    }
}
