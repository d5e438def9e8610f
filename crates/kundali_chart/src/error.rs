//! Error type for natal chart computation.

use kundali_base::{CelestialBody, VedicError};
use kundali_time::TimeError;
use thiserror::Error;

/// Errors from [`crate::compute_natal_chart`].
///
/// Any error aborts the whole chart; no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Out-of-range coordinate or offset, or a malformed date/time.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A body reached a model that has no entry for it.
    #[error("unsupported body: {0}")]
    UnknownBody(CelestialBody),
    /// A formula is undefined for the given input (e.g. Ascendant at a pole).
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(&'static str),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::UnknownBody(body) => Self::UnknownBody(body),
            VedicError::NumericDegeneracy(msg) => Self::NumericDegeneracy(msg),
            VedicError::InvalidLocation(msg) => Self::InvalidInput(msg.to_string()),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_errors_become_invalid_input() {
        let e: ChartError = TimeError::InvalidOffset(15.0).into();
        assert!(matches!(e, ChartError::InvalidInput(_)));
        assert!(e.to_string().contains("15"));
    }

    #[test]
    fn vedic_errors_keep_their_kind() {
        let e: ChartError = VedicError::UnknownBody(CelestialBody::Sun).into();
        assert_eq!(e, ChartError::UnknownBody(CelestialBody::Sun));

        let e: ChartError = VedicError::NumericDegeneracy("pole").into();
        assert_eq!(e, ChartError::NumericDegeneracy("pole"));

        let e: ChartError = VedicError::InvalidLocation("latitude").into();
        assert_eq!(e, ChartError::InvalidInput("latitude".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(
            ChartError::UnknownBody(CelestialBody::Rahu).to_string(),
            "unsupported body: Rahu"
        );
    }
}
