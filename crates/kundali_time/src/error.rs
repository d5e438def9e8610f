//! Error types for civil-time conversion.

use thiserror::Error;

/// Errors from civil date/time validation and UTC conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// UTC offset outside [-12, +14] hours or not finite.
    #[error("UTC offset {0} h outside [-12, +14]")]
    InvalidOffset(f64),
    /// Calendar components do not form a real date/time.
    #[error("invalid date/time: {0}")]
    InvalidDate(String),
    /// A date/time component is NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}
