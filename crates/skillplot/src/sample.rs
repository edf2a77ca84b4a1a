// File: crates/skillplot/src/sample.rs
// Summary: Input data model: rating samples with confidence bounds, match outcome markers.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("lower bound above mean")]
    LowerAboveMean,
    #[error("upper bound below mean")]
    UpperBelowMean,
    #[error("non-finite rating value")]
    NonFinite,
}

/// One rating estimate at a point in time, with a confidence interval.
/// The interval covers ±3 standard deviations by upstream convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillSample {
    pub at: DateTime<Utc>,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl SkillSample {
    /// Construct a sample enforcing interval invariants:
    /// lower <= mean <= upper, all values finite.
    pub fn try_new(at: DateTime<Utc>, mean: f64, lower: f64, upper: f64) -> Result<Self, SampleError> {
        if !(mean.is_finite() && lower.is_finite() && upper.is_finite()) {
            return Err(SampleError::NonFinite);
        }
        if lower > mean { return Err(SampleError::LowerAboveMean); }
        if upper < mean { return Err(SampleError::UpperBelowMean); }
        Ok(Self { at, mean, lower, upper })
    }

    /// Standard deviation implied by the interval: (upper - lower) / 6.
    /// The divisor is an upstream rating-system convention, not derived here.
    pub fn deviation(&self) -> f64 {
        (self.upper - self.lower) / 6.0
    }
}

/// A single match result plotted as a triangle glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeMarker {
    pub at: DateTime<Utc>,
    pub rating: f64,
    pub opponent: String,
}

impl OutcomeMarker {
    pub fn new(at: DateTime<Utc>, rating: f64, opponent: impl Into<String>) -> Self {
        Self { at, rating, opponent: opponent.into() }
    }
}
