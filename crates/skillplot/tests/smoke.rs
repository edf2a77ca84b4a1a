// File: crates/skillplot/tests/smoke.rs
// Purpose: Basic end-to-end render producing SVG markup and a glyph registry.

use chrono::{TimeZone, Utc};
use skillplot::sample::{OutcomeMarker, SkillSample};
use skillplot::{ChartSurface, GlyphKind, RenderOptions, Theme};

fn at(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn january_season() -> (Vec<SkillSample>, Vec<OutcomeMarker>, Vec<OutcomeMarker>) {
    let history = vec![
        SkillSample::try_new(at(2023, 1, 1), 25.0, 20.0, 30.0).unwrap(),
        SkillSample::try_new(at(2023, 2, 1), 26.0, 21.0, 31.0).unwrap(),
    ];
    let wins = vec![OutcomeMarker::new(at(2023, 1, 15), 27.0, "Alice")];
    (history, wins, Vec::new())
}

#[test]
fn render_smoke_svg() {
    let (history, wins, losses) = january_season();
    let mut surface = ChartSurface::new(Theme::light());
    let rendered = surface
        .render(&history, &wins, &losses, &RenderOptions::default())
        .expect("render should succeed");

    assert!(rendered.svg.starts_with("<svg"));
    assert!(rendered.svg.ends_with("</svg>"));
    assert_eq!(rendered.svg.matches("skill_point").count(), 2);
    assert_eq!(rendered.svg.matches("win_point").count(), 1);
    assert_eq!(rendered.svg.matches("loss_point").count(), 0);
    assert_eq!(rendered.svg.matches(r#"class="skill_line""#).count(), 1);
    assert_eq!(rendered.svg.matches(r#"class="skill_interval""#).count(), 1);
    assert_eq!(rendered.glyphs.len(), 3);
}

#[test]
fn example_season_labels_and_domains() {
    let (history, wins, losses) = january_season();
    let mut surface = ChartSurface::new(Theme::light());
    let rendered = surface
        .render(&history, &wins, &losses, &RenderOptions::default())
        .expect("render should succeed");

    assert_eq!(rendered.time_domain.start, at(2023, 1, 1));
    assert_eq!(rendered.time_domain.end, at(2023, 2, 1));
    assert!(rendered.value_domain.min <= 20.0);
    assert!(rendered.value_domain.max >= 31.0);

    let win = rendered
        .glyphs
        .iter()
        .find(|g| g.kind == GlyphKind::Win)
        .expect("one win glyph");
    assert_eq!(win.label, "Alice (27.00)");

    let point = rendered
        .glyphs
        .iter()
        .find(|g| g.kind == GlyphKind::SkillPoint)
        .expect("skill glyphs");
    assert!(point.label.contains("January 2023"));
    assert!(point.label.contains("Rating: 25.000"));
    assert!(point.label.contains("1.667"));
}

#[test]
fn degenerate_history_uses_band_rects() {
    let history = vec![SkillSample::try_new(at(2023, 5, 10), 25.0, 20.0, 30.0).unwrap()];
    let mut surface = ChartSurface::new(Theme::light());
    let rendered = surface
        .render(&history, &[], &[], &RenderOptions::default())
        .expect("single sample must render");

    assert!(rendered.time_domain.degenerate);
    assert!(rendered.svg.contains(r#"<rect class="skill_interval""#));
    assert!(!rendered.svg.contains(r#"<path class="skill_interval""#));
}

#[test]
fn empty_history_fails_render() {
    let mut surface = ChartSurface::new(Theme::light());
    assert!(surface.render(&[], &[], &[], &RenderOptions::default()).is_err());
    assert!(surface.svg().is_none());
}

#[test]
fn tiny_container_fails_render() {
    let (history, wins, losses) = january_season();
    let mut surface = ChartSurface::new(Theme::light());
    let opts = RenderOptions { width: 40, height: 40, ..Default::default() };
    assert!(surface.render(&history, &wins, &losses, &opts).is_err());
}

#[test]
fn draw_labels_off_omits_text() {
    let (history, wins, losses) = january_season();
    let mut surface = ChartSurface::new(Theme::light());
    let opts = RenderOptions { draw_labels: false, ..Default::default() };
    let rendered = surface.render(&history, &wins, &losses, &opts).unwrap();
    assert!(!rendered.svg.contains("<text"));
}

#[test]
fn opponent_names_are_escaped() {
    let history = vec![
        SkillSample::try_new(at(2023, 1, 1), 25.0, 20.0, 30.0).unwrap(),
        SkillSample::try_new(at(2023, 2, 1), 26.0, 21.0, 31.0).unwrap(),
    ];
    let wins = vec![OutcomeMarker::new(at(2023, 1, 15), 27.0, "<b>Mallory</b>")];
    let mut surface = ChartSurface::new(Theme::light());
    let rendered = surface.render(&history, &wins, &[], &RenderOptions::default()).unwrap();
    // Labels live in the glyph registry, verbatim; the markup never embeds them.
    assert_eq!(rendered.glyphs.last().unwrap().label, "<b>Mallory</b> (27.00)");
    assert!(!rendered.svg.contains("Mallory"));
}
