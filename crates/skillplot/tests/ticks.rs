// File: crates/skillplot/tests/ticks.rs
// Purpose: Validate tick density clamping and tick position generation.

use chrono::{TimeZone, Utc};
use skillplot::sample::SkillSample;
use skillplot::ticks;
use skillplot::TimeDomain;

fn at(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn domain(start: (i32, u32, u32), end: (i32, u32, u32)) -> TimeDomain {
    let history = vec![
        SkillSample::try_new(at(start.0, start.1, start.2), 25.0, 20.0, 30.0).unwrap(),
        SkillSample::try_new(at(end.0, end.1, end.2), 26.0, 21.0, 31.0).unwrap(),
    ];
    TimeDomain::from_history(&history).unwrap()
}

#[test]
fn time_ticks_bounded_by_width() {
    // 24 months available, but only 210px of plot: floor(210 / 42) = 5.
    let d = domain((2021, 1, 1), (2023, 1, 1));
    assert_eq!(ticks::time_tick_count(210.0, &d), 5);
}

#[test]
fn time_ticks_bounded_by_month_span() {
    // Wide plot, one-month season: the span wins.
    let d = domain((2023, 1, 1), (2023, 2, 1));
    assert_eq!(ticks::time_tick_count(2000.0, &d), 1);
}

#[test]
fn time_ticks_never_negative() {
    let d = domain((2023, 1, 1), (2023, 2, 1));
    assert_eq!(ticks::time_tick_count(10.0, &d), 0);
    assert!(ticks::time_ticks(&d, 0).is_empty());
}

#[test]
fn sub_month_span_yields_no_ticks() {
    let d = domain((2023, 1, 5), (2023, 1, 25));
    assert_eq!(ticks::months_spanned(d.start, d.end), 0);
    assert_eq!(ticks::time_tick_count(1000.0, &d), 0);
}

#[test]
fn time_ticks_include_domain_endpoints() {
    let d = domain((2022, 1, 1), (2023, 1, 1));
    let t = ticks::time_ticks(&d, 4);
    assert_eq!(t.len(), 4);
    assert_eq!(t[0], d.start);
    assert_eq!(*t.last().unwrap(), d.end);
}

#[test]
fn time_ticks_never_exceed_the_density_cap() {
    // 24 months at 210px: the cap is floor(210 / 42) = 5 ticks, and the
    // rendered instants must not exceed it.
    let d = domain((2021, 1, 1), (2023, 1, 1));
    let count = ticks::time_tick_count(210.0, &d);
    assert_eq!(count, 5);
    assert_eq!(ticks::time_ticks(&d, count).len(), 5);
}

#[test]
fn single_tick_sits_inside_the_domain() {
    let d = domain((2023, 1, 1), (2023, 2, 1));
    let t = ticks::time_ticks(&d, 1);
    assert_eq!(t.len(), 1);
    assert!(t[0] > d.start && t[0] < d.end);
}

#[test]
fn value_ticks_are_round_and_inside_bounds() {
    let t = ticks::value_ticks(18.0, 34.0, 10);
    assert!(!t.is_empty());
    let step = ticks::tick_step(18.0, 34.0, 10);
    for v in &t {
        assert!(*v >= 18.0 - 1e-9 && *v <= 34.0 + 1e-9);
        assert!(((v / step).round() * step - v).abs() < 1e-9, "{} not on step {}", v, step);
    }
}

#[test]
fn value_tick_count_scales_with_height() {
    assert_eq!(ticks::value_tick_count(570.0), 20);
    assert_eq!(ticks::value_tick_count(27.0), 0);
}

#[test]
fn tick_labels_match_step_precision() {
    assert_eq!(ticks::format_value_tick(24.0, 2.0), "24");
    assert_eq!(ticks::format_value_tick(24.5, 0.5), "24.5");
    assert_eq!(ticks::format_time_tick(at(2023, 1, 1)), "Jan 2023");
}
