// File: crates/skillplot/src/glyph.rs
// Summary: Glyph registry records, tooltip label text, and triangle symbol geometry.

use crate::sample::{OutcomeMarker, SkillSample};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphKind {
    SkillPoint,
    Win,
    Loss,
}

/// One rendered marker with its screen position (plot coordinates) and the
/// tooltip text shown on hover. This registry is the record of truth for
/// hit-testing; nothing is read back out of the markup.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub kind: GlyphKind,
    pub x: f32,
    pub y: f32,
    pub label: String,
}

/// Tooltip text for a rating sample: month, year, mean to 3 decimals, and the
/// deviation implied by the ±3σ confidence interval.
pub fn skill_label(sample: &SkillSample) -> String {
    format!(
        "{}\nRating: {:.3} \u{00B1} {:.3}",
        sample.at.format("%B %Y"),
        sample.mean,
        sample.deviation(),
    )
}

/// Tooltip text for a win/loss marker: opponent and rating to 2 decimals.
pub fn outcome_label(marker: &OutcomeMarker) -> String {
    format!("{} ({:.2})", marker.opponent, marker.rating)
}

/// Path data for an upward triangle of the given area, centered on the origin.
/// Losses reuse the same path with a 180° rotation.
pub fn triangle_path(area: f32) -> String {
    let sqrt3 = 3.0f32.sqrt();
    let y = -(area / (sqrt3 * 3.0)).sqrt();
    format!(
        "M0,{:.2}L{:.2},{:.2}L{:.2},{:.2}Z",
        y * 2.0,
        -sqrt3 * y,
        -y,
        sqrt3 * y,
        -y,
    )
}
