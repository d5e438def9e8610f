//! Whole-sign bhavas (houses) counted from the Lagna.
//!
//! House `n` spans `[asc + (n−1)·30, asc + n·30)` measured from the
//! Ascendant's sidereal longitude.

use std::fmt;

use serde::Serialize;

use crate::util::normalize_360;

/// A house, 1..=12. Serializes as `{ "number": 4, "name": "Sukha" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "BhavaRecord")]
pub struct Bhava(u8);

#[derive(Serialize)]
struct BhavaRecord {
    number: u8,
    name: &'static str,
}

const BHAVA_NAMES: [&str; 12] = [
    "Lagna", "Dhana", "Sahaja", "Sukha", "Putra", "Ripu", "Kalatra", "Randhra", "Dharma", "Karma",
    "Labha", "Vyaya",
];

impl Bhava {
    /// The first house, occupied by the Ascendant itself.
    pub const LAGNA: Bhava = Bhava(1);

    /// House from its number; `None` outside 1..=12.
    pub const fn new(number: u8) -> Option<Bhava> {
        if number >= 1 && number <= 12 {
            Some(Bhava(number))
        } else {
            None
        }
    }

    /// House number, 1..=12.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Traditional name.
    pub const fn name(self) -> &'static str {
        BHAVA_NAMES[(self.0 - 1) as usize]
    }

    /// House of a point given both sidereal longitudes in degrees.
    ///
    /// `floor(normalize(lon − asc) / 30) + 1`.
    pub fn from_longitudes(sidereal_lon_deg: f64, ascendant_sidereal_deg: f64) -> Bhava {
        let diff = normalize_360(sidereal_lon_deg - ascendant_sidereal_deg);
        let offset = ((diff / 30.0).floor() as u8).min(11);
        Bhava(offset + 1)
    }

    /// Classification used for house strength.
    pub const fn class(self) -> BhavaClass {
        BhavaClass::classify(self)
    }
}

impl From<Bhava> for BhavaRecord {
    fn from(b: Bhava) -> Self {
        Self {
            number: b.number(),
            name: b.name(),
        }
    }
}

impl fmt::Display for Bhava {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

/// Strength class of a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BhavaClass {
    /// Angular: 1, 4, 7, 10.
    Kendra,
    /// Trinal: 5, 9.
    Trikona,
    /// Growing: 3, 6, 11.
    Upachaya,
    /// Difficult: 6, 8, 12.
    Dusthana,
    /// None of the above (house 2).
    Neutral,
}

impl BhavaClass {
    /// Classify a house. Sets overlap (1 is kendra and trikona, 6 is
    /// upachaya and dusthana); the first match in the order
    /// kendra, trikona, upachaya, dusthana wins.
    pub const fn classify(bhava: Bhava) -> BhavaClass {
        match bhava.0 {
            1 | 4 | 7 | 10 => Self::Kendra,
            5 | 9 => Self::Trikona,
            3 | 6 | 11 => Self::Upachaya,
            8 | 12 => Self::Dusthana,
            _ => Self::Neutral,
        }
    }

    /// Short label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kendra => "Kendra",
            Self::Trikona => "Trikona",
            Self::Upachaya => "Upachaya",
            Self::Dusthana => "Dusthana",
            Self::Neutral => "Neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(n: u8) -> Bhava {
        Bhava::new(n).unwrap()
    }

    #[test]
    fn numbers_and_names() {
        assert!(Bhava::new(0).is_none());
        assert!(Bhava::new(13).is_none());
        assert_eq!(Bhava::LAGNA.number(), 1);
        assert_eq!(Bhava::LAGNA.name(), "Lagna");
        assert_eq!(b(7).name(), "Kalatra");
        assert_eq!(b(12).name(), "Vyaya");
    }

    #[test]
    fn same_longitude_is_first_house() {
        assert_eq!(Bhava::from_longitudes(123.4, 123.4), Bhava::LAGNA);
    }

    #[test]
    fn counts_forward_from_ascendant() {
        let asc = 280.0;
        assert_eq!(Bhava::from_longitudes(309.99, asc).number(), 1);
        assert_eq!(Bhava::from_longitudes(310.0, asc).number(), 2);
        assert_eq!(Bhava::from_longitudes(10.0, asc).number(), 4);
        assert_eq!(Bhava::from_longitudes(279.99, asc).number(), 12);
    }

    #[test]
    fn every_house_reachable() {
        for n in 0..12 {
            let lon = 17.0 + n as f64 * 30.0 + 5.0;
            assert_eq!(Bhava::from_longitudes(lon, 17.0).number(), n + 1);
        }
    }

    #[test]
    fn classification_priority() {
        assert_eq!(b(1).class(), BhavaClass::Kendra);
        assert_eq!(b(2).class(), BhavaClass::Neutral);
        assert_eq!(b(5).class(), BhavaClass::Trikona);
        assert_eq!(b(6).class(), BhavaClass::Upachaya);
        assert_eq!(b(8).class(), BhavaClass::Dusthana);
        assert_eq!(b(10).class(), BhavaClass::Kendra);
        assert_eq!(b(11).class(), BhavaClass::Upachaya);
        assert_eq!(b(12).class(), BhavaClass::Dusthana);
    }

    #[test]
    fn display() {
        assert_eq!(b(4).to_string(), "4 (Sukha)");
    }
}
