// File: crates/skillplot/src/ticks.rs
// Summary: Tick count rules, tick position generation, and tick label formatting.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::domain::TimeDomain;

/// Minimum horizontal pixels per time tick before labels crowd.
pub const X_TICK_SPACING: f32 = 42.0;
/// Minimum vertical pixels per value tick.
pub const Y_TICK_SPACING: f32 = 28.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Whole months spanned from `a` to `b`, never negative.
pub fn months_spanned(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let months = (b.year() as i64 - a.year() as i64) * 12
        + (b.month() as i64 - a.month() as i64);
    months.max(0)
}

/// Time tick count: limited by both available width and the number of whole
/// months in the domain, so short seasons and narrow containers stay legible.
pub fn time_tick_count(plot_w: f32, domain: &TimeDomain) -> usize {
    let by_width = (plot_w / X_TICK_SPACING).floor().max(0.0) as i64;
    let by_span = months_spanned(domain.start, domain.end);
    by_width.min(by_span).max(0) as usize
}

pub fn value_tick_count(plot_h: f32) -> usize {
    (plot_h / Y_TICK_SPACING).floor().max(0.0) as usize
}

/// Exactly `count` evenly spaced instants across the domain, endpoints
/// included for two or more; a lone tick sits at the domain midpoint. Zero
/// yields no ticks.
pub fn time_ticks(domain: &TimeDomain, count: usize) -> Vec<DateTime<Utc>> {
    if count == 0 { return Vec::new(); }
    let t0 = domain.start.timestamp_millis() as f64;
    let t1 = domain.end.timestamp_millis() as f64;
    let positions = if count == 1 {
        vec![(t0 + t1) * 0.5]
    } else {
        linspace(t0, t1, count)
    };
    positions
        .into_iter()
        .filter_map(|ms| Utc.timestamp_millis_opt(ms.round() as i64).single())
        .collect()
}

/// Round tick step covering `span / count`, snapped to 1/2/5 x 10^k.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let step0 = (stop - start).abs() / count;
    if step0 <= 0.0 { return 1.0; }
    let step1 = 10f64.powf(step0.log10().floor());
    let err = step0 / step1;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    step1 * factor
}

/// Expand `[min, max]` outward to multiples of the tick step.
pub fn nice_bounds(min: f64, max: f64, count: usize) -> (f64, f64) {
    let step = tick_step(min, max, count);
    ((min / step).floor() * step, (max / step).ceil() * step)
}

/// Round tick values inside `[min, max]`, inclusive of niced endpoints.
pub fn value_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || max <= min { return Vec::new(); }
    let step = tick_step(min, max, count);
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let mut out = Vec::new();
    let mut i = first;
    while i <= last {
        out.push(i * step);
        i += 1.0;
    }
    out
}

/// Format a value tick with just enough decimals for its step.
pub fn format_value_tick(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{:.*}", decimals, v)
}

/// Format a time tick as "Mon YYYY".
pub fn format_time_tick(t: DateTime<Utc>) -> String {
    t.format("%b %Y").to_string()
}
