// File: crates/skillplot/src/scale.rs
// Summary: Time (X) and Value (Y) linear scale transforms between data and pixels.

use chrono::{DateTime, Utc};

use crate::domain::{TimeDomain, ValueDomain};

/// Horizontal linear time scale mapping a timestamp domain to [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    start_ms: f64,
    end_ms: f64,
    pub left_px: f32,
    pub right_px: f32,
}

impl TimeScale {
    pub fn new(domain: &TimeDomain, left_px: f32, right_px: f32) -> Self {
        Self {
            start_ms: domain.start.timestamp_millis() as f64,
            end_ms: domain.end.timestamp_millis() as f64,
            left_px,
            right_px,
        }
    }

    #[inline]
    pub fn to_px(&self, t: DateTime<Utc>) -> f32 {
        let span = (self.end_ms - self.start_ms).max(1.0);
        let frac = (t.timestamp_millis() as f64 - self.start_ms) / span;
        self.left_px + frac as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels, inverted:
/// larger value, smaller pixel y.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub vmin: f64,
    pub vmax: f64,
    pub top_px: f32,
    pub bottom_px: f32,
}

impl ValueScale {
    pub fn new_linear(domain: &ValueDomain, top_px: f32, bottom_px: f32) -> Self {
        let mut s = Self { vmin: domain.min, vmax: domain.max, top_px, bottom_px };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
