//! Error types for positional calculations.

use thiserror::Error;

use crate::graha::CelestialBody;

/// Errors from the positional models.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A body without mean orbital elements reached the planetary model.
    #[error("no mean orbital elements for {}", .0.english_name())]
    UnknownBody(CelestialBody),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// A formula is undefined for the given input.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(&'static str),
    /// Angle outside the range a DMS value can hold.
    #[error("angle {0} out of range (finite, |deg| < 360)")]
    InvalidAngle(f64),
}
