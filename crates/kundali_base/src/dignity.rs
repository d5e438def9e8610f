//! Sign dignity and placement strength.
//!
//! Exaltation and own-sign tables follow BPHS at whole-sign resolution.
//! Debilitation is the sign opposite exaltation. Rahu, Ketu and the
//! Ascendant carry no dignity.

use serde::Serialize;

use crate::bhava::{Bhava, BhavaClass};
use crate::graha::CelestialBody;
use crate::rashi::Rashi;

/// Dignity of a body in a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    Neutral,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::OwnSign => "Own sign",
            Self::Neutral => "Neutral",
        }
    }
}

/// Exaltation sign. `None` for the nodes and the Ascendant.
pub const fn exaltation_rashi(body: CelestialBody) -> Option<Rashi> {
    match body {
        CelestialBody::Sun => Some(Rashi::Mesha),
        CelestialBody::Moon => Some(Rashi::Vrishabha),
        CelestialBody::Mars => Some(Rashi::Makara),
        CelestialBody::Mercury => Some(Rashi::Kanya),
        CelestialBody::Jupiter => Some(Rashi::Karka),
        CelestialBody::Venus => Some(Rashi::Meena),
        CelestialBody::Saturn => Some(Rashi::Tula),
        CelestialBody::Rahu | CelestialBody::Ketu | CelestialBody::Ascendant => None,
    }
}

/// Debilitation sign, opposite exaltation.
pub const fn debilitation_rashi(body: CelestialBody) -> Option<Rashi> {
    match exaltation_rashi(body) {
        Some(r) => Some(r.opposite()),
        None => None,
    }
}

/// Signs ruled by a body. Empty for the nodes and the Ascendant.
pub const fn own_rashis(body: CelestialBody) -> &'static [Rashi] {
    match body {
        CelestialBody::Sun => &[Rashi::Simha],
        CelestialBody::Moon => &[Rashi::Karka],
        CelestialBody::Mars => &[Rashi::Mesha, Rashi::Vrischika],
        CelestialBody::Mercury => &[Rashi::Mithuna, Rashi::Kanya],
        CelestialBody::Jupiter => &[Rashi::Dhanu, Rashi::Meena],
        CelestialBody::Venus => &[Rashi::Vrishabha, Rashi::Tula],
        CelestialBody::Saturn => &[Rashi::Makara, Rashi::Kumbha],
        CelestialBody::Rahu | CelestialBody::Ketu | CelestialBody::Ascendant => &[],
    }
}

/// Dignity of `body` placed in `rashi`.
///
/// Priority: exalted > debilitated > own sign > neutral.
pub fn dignity_in_rashi(body: CelestialBody, rashi: Rashi) -> Dignity {
    if exaltation_rashi(body) == Some(rashi) {
        return Dignity::Exalted;
    }
    if debilitation_rashi(body) == Some(rashi) {
        return Dignity::Debilitated;
    }
    if own_rashis(body).contains(&rashi) {
        return Dignity::OwnSign;
    }
    Dignity::Neutral
}

/// Placement strength of a body: sign dignity plus house class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub dignity: Dignity,
    pub house_class: BhavaClass,
}

impl Strength {
    pub fn of(body: CelestialBody, rashi: Rashi, bhava: Bhava) -> Self {
        Self {
            dignity: dignity_in_rashi(body, rashi),
            house_class: bhava.class(),
        }
    }
}
