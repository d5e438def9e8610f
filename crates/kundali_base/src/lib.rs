//! Closed-form positional models and sidereal chart mapping.
//!
//! This crate provides:
//! - Low-precision tropical longitudes for the Sun, Moon, five planets,
//!   the mean lunar nodes and the Ascendant
//! - A single linear ayanamsha and tropical → sidereal conversion
//! - Rashi (sign) placement, whole-sign bhava (house) numbering and
//!   sign dignity
//!
//! Every function is pure: no kernels, no I/O, no shared state.

pub mod ayanamsha;
pub mod bhava;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar;
pub mod lunar_nodes;
pub mod planets;
pub mod rashi;
pub mod solar;
pub mod util;

pub use ayanamsha::{
    AYANAMSHA_AT_EPOCH_DEG, AYANAMSHA_EPOCH_JD, AYANAMSHA_LABEL, PRECESSION_ARCSEC_PER_YEAR,
    ayanamsha_deg, sidereal_longitude, tropical_to_sidereal,
};
pub use bhava::{Bhava, BhavaClass};
pub use dignity::{
    Dignity, Strength, debilitation_rashi, dignity_in_rashi, exaltation_rashi, own_rashis,
};
pub use error::VedicError;
pub use graha::{ALL_BODIES, CelestialBody, MEAN_ELEMENT_PLANETS};
pub use lagna::{GeoLocation, ascendant_from_lst_deg, lagna_longitude_deg, mean_obliquity_deg};
pub use lunar::moon_longitude_deg;
pub use lunar_nodes::{LunarNode, lunar_node_deg, mean_ketu_deg, mean_rahu_deg};
pub use planets::{MeanElements, mean_elements, planet_longitude_deg};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_from_tropical,
};
pub use solar::sun_longitude_deg;
pub use util::normalize_360;
