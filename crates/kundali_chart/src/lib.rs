//! Sidereal natal chart for a birth time and place.
//!
//! One entry point, [`compute_natal_chart`], turns local civil time, a
//! UTC offset and geographic coordinates into a [`ChartResult`]: the
//! tropical and sidereal longitude, rashi and whole-sign bhava of the nine
//! grahas and the Ascendant.
//!
//! ```rust
//! use kundali_chart::{CelestialBody, LocalDateTime, compute_natal_chart};
//!
//! let birth: LocalDateTime = "2000-01-01T12:00".parse().unwrap();
//! let chart = compute_natal_chart(&birth, 51.5074, -0.1278, 0.0).unwrap();
//! let sun = chart.get(CelestialBody::Sun);
//! println!("Sun in {} at {:.2}°, house {}", sun.sign_name(), sun.degree_in_sign(), sun.house_number());
//! ```
//!
//! Computation is pure and stateless; charts may be computed from any
//! number of threads concurrently.

pub mod chart;
pub mod error;

pub use chart::{BodyPosition, ChartResult, compute_chart_at, compute_natal_chart};
pub use error::ChartError;

// Re-export the types a caller needs to build inputs and read results.
pub use kundali_base::{
    ALL_BODIES, Bhava, BhavaClass, CelestialBody, Dignity, Dms, GeoLocation, Rashi, RashiInfo,
    Strength,
};
pub use kundali_time::{Instant, LocalDateTime, UtcOffset, UtcTime};
