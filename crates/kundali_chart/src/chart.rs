//! Natal chart assembly.
//!
//! A chart is built in two stages. The first computes the tropical
//! longitude of all ten bodies, Ascendant first. The second converts each
//! to sidereal and assigns its sign and house relative to the Ascendant.
//! Only the finished [`ChartResult`] leaves this module.

use kundali_base::{
    ALL_BODIES, AYANAMSHA_LABEL, Bhava, CelestialBody, GeoLocation, LunarNode, RashiInfo,
    Strength, ayanamsha_deg, lagna_longitude_deg, lunar_node_deg, moon_longitude_deg,
    planet_longitude_deg, rashi_from_longitude, sidereal_longitude, sun_longitude_deg,
};
use kundali_time::{Instant, LocalDateTime, UtcOffset, UtcTime, jd_to_centuries};
use serde::Serialize;

use crate::error::ChartError;

/// Where one body falls in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: CelestialBody,
    /// Tropical ecliptic longitude, degrees [0, 360).
    pub tropical_longitude: f64,
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub sidereal_longitude: f64,
    /// Sign placement of the sidereal longitude.
    pub rashi: RashiInfo,
    /// Whole-sign house counted from the Ascendant.
    pub bhava: Bhava,
}

impl BodyPosition {
    /// 0-based sign index (0 = Mesha).
    pub fn sign_index(&self) -> u8 {
        self.rashi.rashi_index
    }

    /// Degrees within the sign, [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        self.rashi.degrees_in_rashi
    }

    pub fn sign_name(&self) -> &'static str {
        self.rashi.rashi.name()
    }

    pub fn house_number(&self) -> u8 {
        self.bhava.number()
    }

    pub fn house_name(&self) -> &'static str {
        self.bhava.name()
    }
}

/// A computed natal chart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    instant: Instant,
    utc_offset: UtcOffset,
    location: GeoLocation,
    ayanamsha: f64,
    ayanamsha_label: &'static str,
    positions: [BodyPosition; CelestialBody::COUNT],
}

impl ChartResult {
    /// Julian Day (UTC) of the birth instant.
    pub fn jd(&self) -> f64 {
        self.instant.jd()
    }

    /// Ayanamsha applied to every body, degrees.
    pub fn ayanamsha(&self) -> f64 {
        self.ayanamsha
    }

    /// Name of the ayanamsha model.
    pub fn ayanamsha_label(&self) -> &'static str {
        self.ayanamsha_label
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Birth time in UTC.
    pub fn birth_utc(&self) -> UtcTime {
        self.instant.utc()
    }

    pub fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude_deg
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude_deg
    }

    /// Position of a body. Every body is always present.
    pub fn get(&self, body: CelestialBody) -> &BodyPosition {
        &self.positions[body.index()]
    }

    /// All ten positions in [`CelestialBody::index`] order.
    pub fn positions(&self) -> &[BodyPosition; CelestialBody::COUNT] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyPosition> {
        self.positions.iter()
    }

    pub fn ascendant(&self) -> &BodyPosition {
        self.get(CelestialBody::Ascendant)
    }

    /// Sign dignity and house class of a body.
    pub fn strength(&self, body: CelestialBody) -> Strength {
        let pos = self.get(body);
        Strength::of(body, pos.rashi.rashi, pos.bhava)
    }
}

/// Tropical longitude of a non-Ascendant body.
fn body_tropical_longitude(body: CelestialBody, jd: f64) -> Result<f64, ChartError> {
    let lon = match body {
        CelestialBody::Sun => sun_longitude_deg(jd),
        CelestialBody::Moon => moon_longitude_deg(jd),
        CelestialBody::Rahu => lunar_node_deg(LunarNode::Rahu, jd_to_centuries(jd)),
        CelestialBody::Ketu => lunar_node_deg(LunarNode::Ketu, jd_to_centuries(jd)),
        CelestialBody::Mercury
        | CelestialBody::Venus
        | CelestialBody::Mars
        | CelestialBody::Jupiter
        | CelestialBody::Saturn => planet_longitude_deg(body, jd)?,
        CelestialBody::Ascendant => return Err(ChartError::UnknownBody(body)),
    };
    Ok(lon)
}

/// Stage one: tropical longitudes of all ten bodies, indexed by
/// [`CelestialBody::index`].
fn tropical_longitudes(
    jd: f64,
    location: &GeoLocation,
) -> Result<[f64; CelestialBody::COUNT], ChartError> {
    let mut lons = [0.0; CelestialBody::COUNT];
    lons[CelestialBody::Ascendant.index()] = lagna_longitude_deg(jd, location)?;
    for body in CelestialBody::GRAHAS {
        lons[body.index()] = body_tropical_longitude(body, jd)?;
    }
    if let Some(i) = lons.iter().position(|l| !l.is_finite()) {
        log::warn!("non-finite longitude for {}", ALL_BODIES[i]);
        return Err(ChartError::NumericDegeneracy("non-finite body longitude"));
    }
    Ok(lons)
}

/// Stage two: sidereal longitude, sign and house for one body.
fn place(body: CelestialBody, tropical: f64, ayanamsha: f64, asc_sidereal: f64) -> BodyPosition {
    let sidereal = sidereal_longitude(tropical, ayanamsha);
    let bhava = match body {
        CelestialBody::Ascendant => Bhava::LAGNA,
        _ => Bhava::from_longitudes(sidereal, asc_sidereal),
    };
    BodyPosition {
        body,
        tropical_longitude: tropical,
        sidereal_longitude: sidereal,
        rashi: rashi_from_longitude(sidereal),
        bhava,
    }
}

/// Validate the observer coordinates, mapping failures to `InvalidInput`.
fn validate_location(latitude_deg: f64, longitude_deg: f64) -> Result<GeoLocation, ChartError> {
    GeoLocation::new(latitude_deg, longitude_deg).map_err(|e| {
        ChartError::InvalidInput(format!("{e} (lat {latitude_deg}, lon {longitude_deg})"))
    })
}

/// Compute a natal chart for a UTC instant and a validated location.
pub fn compute_chart_at(
    instant: Instant,
    utc_offset: UtcOffset,
    location: GeoLocation,
) -> Result<ChartResult, ChartError> {
    let jd = instant.jd();
    let ayanamsha = ayanamsha_deg(jd);
    let tropical = tropical_longitudes(jd, &location)?;

    let asc_tropical = tropical[CelestialBody::Ascendant.index()];
    let asc_sidereal = sidereal_longitude(asc_tropical, ayanamsha);
    let positions =
        ALL_BODIES.map(|body| place(body, tropical[body.index()], ayanamsha, asc_sidereal));

    log::debug!(
        "chart at JD {jd:.6}: ayanamsha {ayanamsha:.6}, ascendant {asc_tropical:.6} tropical / {asc_sidereal:.6} sidereal"
    );

    Ok(ChartResult {
        instant,
        utc_offset,
        location,
        ayanamsha,
        ayanamsha_label: AYANAMSHA_LABEL,
        positions,
    })
}

/// Compute a natal chart from local birth time and place.
///
/// `utc_offset_hours` is the offset of the local clock from UTC (east
/// positive, [-12, 14]). Latitude must lie in [-90, 90] and longitude in
/// [-180, 180], both in degrees, east and north positive.
///
/// # Errors
///
/// - [`ChartError::InvalidInput`] for out-of-range coordinates or offset,
///   or an impossible date/time
/// - [`ChartError::NumericDegeneracy`] at latitude exactly ±90°, where the
///   Ascendant is undefined
pub fn compute_natal_chart(
    local: &LocalDateTime,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> Result<ChartResult, ChartError> {
    let location = validate_location(latitude_deg, longitude_deg)?;
    let offset = UtcOffset::new(utc_offset_hours)?;
    let instant = Instant::from_local(local, offset)?;
    compute_chart_at(instant, offset, location)
}
