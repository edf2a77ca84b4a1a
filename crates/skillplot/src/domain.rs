// File: crates/skillplot/src/domain.rs
// Summary: Derived time and value domains: extents, degenerate widening, nice rounding.

use chrono::{DateTime, Months, Utc};

use crate::sample::{OutcomeMarker, SkillSample};
use crate::ticks::nice_bounds;

/// Tick count the value domain is niced against.
const NICE_COUNT: usize = 10;

/// Min/max timestamp across the skill history.
///
/// A single sample (or a history of identical timestamps) has zero extent, so
/// the domain is widened by one calendar month on each side; `degenerate`
/// records that the widening happened, because the confidence band switches
/// from an area to per-sample rectangles in that case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDomain {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub degenerate: bool,
}

impl TimeDomain {
    pub fn from_history(history: &[SkillSample]) -> Option<Self> {
        let first = history.first()?.at;
        let mut start = first;
        let mut end = first;
        for s in history {
            if s.at < start { start = s.at; }
            if s.at > end { end = s.at; }
        }
        if start == end {
            // Month arithmetic clamps end-of-month dates (May 31 widens to
            // Apr 30 / Jun 30) rather than overflowing into the next month.
            let widened_start = start.checked_sub_months(Months::new(1)).unwrap_or(start);
            let widened_end = end.checked_add_months(Months::new(1)).unwrap_or(end);
            return Some(Self { start: widened_start, end: widened_end, degenerate: true });
        }
        Some(Self { start, end, degenerate: false })
    }
}

/// Min/max rating value across sample bounds and all outcome markers, niced
/// to round numbers for axis labeling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub fn from_data(
        history: &[SkillSample],
        wins: &[OutcomeMarker],
        losses: &[OutcomeMarker],
    ) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for s in history {
            min = min.min(s.lower);
            max = max.max(s.upper);
        }
        for m in wins.iter().chain(losses) {
            min = min.min(m.rating);
            max = max.max(m.rating);
        }
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if (max - min).abs() < 1e-12 { max = min + 1.0; }
        let (min, max) = nice_bounds(min, max, NICE_COUNT);
        Some(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
