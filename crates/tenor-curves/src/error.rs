//! Error types for curve operations.

use tenor_core::types::Date;
use tenor_core::CoreError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Query date lies outside the stored maturities. The curve does not extrapolate.
    #[error("Date {requested} out of range [{min}, {max}]")]
    DateOutOfRange {
        /// The requested date.
        requested: Date,
        /// Earliest stored maturity.
        min: Date,
        /// Latest stored maturity.
        max: Date,
    },

    /// Query against a curve holding no points.
    #[error("Date {requested} out of range: curve has no points")]
    EmptyCurve {
        /// The requested date.
        requested: Date,
    },

    /// Two bracketing maturities span zero time.
    #[error("Degenerate interpolation interval at {date}")]
    DegenerateInterval {
        /// Bracketing maturity where the interval collapsed.
        date: Date,
    },

    /// Tenor string or tenor arithmetic could not produce a date.
    #[error("Invalid tenor: {reason}")]
    InvalidTenor {
        /// Description of the tenor error.
        reason: String,
    },

    /// Curve configuration is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// Error from the core date utilities.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a date out of range error.
    #[must_use]
    pub fn date_out_of_range(requested: Date, min: Date, max: Date) -> Self {
        Self::DateOutOfRange {
            requested,
            min,
            max,
        }
    }

    /// Creates an empty curve error.
    #[must_use]
    pub fn empty_curve(requested: Date) -> Self {
        Self::EmptyCurve { requested }
    }

    /// Creates a degenerate interval error.
    #[must_use]
    pub fn degenerate_interval(date: Date) -> Self {
        Self::DegenerateInterval { date }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True when the query fell outside the curve, including an empty curve.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::DateOutOfRange { .. } | Self::EmptyCurve { .. })
    }
}
