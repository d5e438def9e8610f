//! Mean-longitude model for Mercury through Saturn.
//!
//! Each planet carries a mean longitude at J2000.0 and a mean motion per
//! Julian century. The longitude is propagated linearly:
//!
//! ```text
//! λ = L0 + L1 · T
//! ```
//!
//! Semi-major axis, eccentricity and inclination are tabulated alongside
//! but do not enter the longitude. No geocentric correction is applied, so
//! the result is a mean heliocentric longitude used in place of the
//! geocentric one.

use kundali_time::jd_to_centuries;

use crate::error::VedicError;
use crate::graha::CelestialBody;
use crate::util::normalize_360;

/// Mean orbital elements of one planet, referred to J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Mean longitude at J2000.0, degrees.
    pub l0_deg: f64,
    /// Mean motion, degrees per Julian century.
    pub l1_deg_per_century: f64,
    /// Semi-major axis, AU.
    pub semi_major_axis_au: f64,
    /// Eccentricity.
    pub eccentricity: f64,
    /// Inclination to the ecliptic, degrees.
    pub inclination_deg: f64,
}

const MERCURY: MeanElements = MeanElements {
    l0_deg: 252.250_323_50,
    l1_deg_per_century: 149_472.674_111_75,
    semi_major_axis_au: 0.387_099_27,
    eccentricity: 0.205_635_93,
    inclination_deg: 7.004_979_02,
};

const VENUS: MeanElements = MeanElements {
    l0_deg: 181.979_099_50,
    l1_deg_per_century: 58_517.815_387_29,
    semi_major_axis_au: 0.723_335_66,
    eccentricity: 0.006_776_72,
    inclination_deg: 3.394_676_05,
};

const MARS: MeanElements = MeanElements {
    l0_deg: 355.432_999_58,
    l1_deg_per_century: 19_140.302_684_99,
    semi_major_axis_au: 1.523_710_34,
    eccentricity: 0.093_394_10,
    inclination_deg: 1.849_691_42,
};

const JUPITER: MeanElements = MeanElements {
    l0_deg: 34.396_440_51,
    l1_deg_per_century: 3_034.746_127_75,
    semi_major_axis_au: 5.202_887_00,
    eccentricity: 0.048_386_24,
    inclination_deg: 1.304_396_95,
};

const SATURN: MeanElements = MeanElements {
    l0_deg: 49.954_244_23,
    l1_deg_per_century: 1_222.493_622_01,
    semi_major_axis_au: 9.536_675_94,
    eccentricity: 0.053_861_79,
    inclination_deg: 2.485_991_87,
};

/// Mean elements for a body.
///
/// Only the five bodies in [`crate::graha::MEAN_ELEMENT_PLANETS`] have
/// entries; every other body yields [`VedicError::UnknownBody`].
pub fn mean_elements(body: CelestialBody) -> Result<&'static MeanElements, VedicError> {
    match body {
        CelestialBody::Mercury => Ok(&MERCURY),
        CelestialBody::Venus => Ok(&VENUS),
        CelestialBody::Mars => Ok(&MARS),
        CelestialBody::Jupiter => Ok(&JUPITER),
        CelestialBody::Saturn => Ok(&SATURN),
        CelestialBody::Sun
        | CelestialBody::Moon
        | CelestialBody::Rahu
        | CelestialBody::Ketu
        | CelestialBody::Ascendant => Err(VedicError::UnknownBody(body)),
    }
}

/// Mean longitude from elements at `t` Julian centuries since J2000.0.
pub fn mean_longitude_deg(elements: &MeanElements, t: f64) -> f64 {
    normalize_360(elements.l0_deg + elements.l1_deg_per_century * t)
}

/// Tropical longitude of a mean-element planet at a Julian Day, degrees [0, 360).
pub fn planet_longitude_deg(body: CelestialBody, jd: f64) -> Result<f64, VedicError> {
    let elements = mean_elements(body)?;
    Ok(mean_longitude_deg(elements, jd_to_centuries(jd)))
}
