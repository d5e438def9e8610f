//! The ten chart points: nine grahas plus the Ascendant (Lagna).
//!
//! The set is closed. Every table keyed by body is an exhaustive `match`,
//! so a missing entry is a compile error rather than a silent default.

use serde::Serialize;

/// A point placed in the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
    Ascendant,
}

/// All ten chart points in index order (Ascendant last).
pub const ALL_BODIES: [CelestialBody; 10] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Rahu,
    CelestialBody::Ketu,
    CelestialBody::Ascendant,
];

/// The five planets propagated from mean orbital elements.
pub const MEAN_ELEMENT_PLANETS: [CelestialBody; 5] = [
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
];

impl CelestialBody {
    /// Number of chart points.
    pub const COUNT: usize = 10;

    /// The nine grahas (everything except the Ascendant), in traditional
    /// listing order: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn,
    /// Rahu, Ketu.
    pub const GRAHAS: [CelestialBody; 9] = [
        Self::Sun,
        Self::Moon,
        Self::Mars,
        Self::Mercury,
        Self::Jupiter,
        Self::Venus,
        Self::Saturn,
        Self::Rahu,
        Self::Ketu,
    ];

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Ascendant",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mercury => "Buddha",
            Self::Venus => "Shukra",
            Self::Mars => "Mangala",
            Self::Jupiter => "Guru",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Lagna",
        }
    }

    /// Astronomical glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Rahu => "☊",
            Self::Ketu => "☋",
            Self::Ascendant => "↗",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
            Self::Ascendant => 9,
        }
    }
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bodies_count() {
        assert_eq!(ALL_BODIES.len(), CelestialBody::COUNT);
    }

    #[test]
    fn body_indices_sequential() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index(), i);
        }
    }

    #[test]
    fn grahas_exclude_ascendant() {
        assert_eq!(CelestialBody::GRAHAS.len(), 9);
        assert!(!CelestialBody::GRAHAS.contains(&CelestialBody::Ascendant));
    }

    #[test]
    fn names_nonempty() {
        for b in ALL_BODIES {
            assert!(!b.english_name().is_empty());
            assert!(!b.sanskrit_name().is_empty());
            assert!(!b.symbol().is_empty());
        }
    }

    #[test]
    fn display_uses_english_name() {
        assert_eq!(CelestialBody::Jupiter.to_string(), "Jupiter");
    }
}
