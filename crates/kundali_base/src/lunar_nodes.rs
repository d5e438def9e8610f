//! Mean lunar nodes: Rahu (ascending) and Ketu (descending).
//!
//! Rahu follows the mean longitude of the Moon's ascending node,
//!
//! ```text
//! Ω = 125.04452 − 1934.136261 T + 0.0020708 T² + T³ / 450000
//! ```
//!
//! (Meeus, "Astronomical Algorithms" 2nd ed, Chapter 22). Ketu is always
//! exactly opposite.

use serde::Serialize;

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarNode {
    /// Ascending node (North Node).
    Rahu,
    /// Descending node (South Node). Always Rahu + 180 deg.
    Ketu,
}

/// Mean Rahu longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    normalize_360(125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0)
}

/// Mean Ketu longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

/// Longitude of the requested node at `t` Julian centuries since J2000.0.
pub fn lunar_node_deg(node: LunarNode, t: f64) -> f64 {
    match node {
        LunarNode::Rahu => mean_rahu_deg(t),
        LunarNode::Ketu => mean_ketu_deg(t),
    }
}
