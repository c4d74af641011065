//! Error types shared across the scoring core.

use thiserror::Error;

/// Errors raised while scoring a candidate site.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    /// The road layer holds no road of an accepted class, so the
    /// accessibility criterion has no defined distance.
    #[error("no qualifying roads are available to measure accessibility")]
    NoQualifyingRoads,
}

/// Errors raised when validating scoring thresholds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    /// A threshold was zero, negative, or not a finite number.
    #[error("threshold `{field}` must be a finite number greater than zero (got {value})")]
    NotPositive {
        /// Name of the offending threshold.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Errors raised when constructing a road geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoadError {
    /// The line string holds fewer than two coordinates.
    #[error("road geometry needs at least two coordinates (got {count})")]
    Degenerate {
        /// Number of coordinates supplied.
        count: usize,
    },
}

/// Errors raised when validating a query point.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SitePointError {
    /// Latitude was not finite or fell outside `-90.0..=90.0`.
    #[error("latitude must be finite and within -90..=90 (got {0})")]
    Latitude(f64),
    /// Longitude was not finite or fell outside `-180.0..=180.0`.
    #[error("longitude must be finite and within -180..=180 (got {0})")]
    Longitude(f64),
}
