// File: crates/skillplot/src/hover.rs
// Summary: Nearest-region hit testing over glyph positions and tooltip records.

use crate::geometry::RectF;
use crate::glyph::Glyph;

/// Nearest-glyph partition of the plot area. Any pointer position inside the
/// plot rect belongs to the region of its closest glyph, so small markers are
/// hoverable without pixel-perfect targeting. Membership in a region is the
/// nearest-point relation, which is exactly a Voronoi tessellation clipped to
/// the plot; no cell polygons are materialized.
#[derive(Clone, Debug)]
pub struct HitRegions {
    plot: RectF,
    points: Vec<(f32, f32)>,
}

impl HitRegions {
    pub fn new(plot: RectF, glyphs: &[Glyph]) -> Self {
        Self {
            plot,
            points: glyphs.iter().map(|g| (g.x, g.y)).collect(),
        }
    }

    /// Region owning `(x, y)` in plot coordinates, or None outside the plot
    /// rect or when there are no glyphs. Ties go to the earliest glyph.
    pub fn locate(&self, x: f32, y: f32) -> Option<usize> {
        if !self.plot.contains(x, y) {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for (i, &(px, py)) in self.points.iter().enumerate() {
            let d2 = (px - x) * (px - x) + (py - y) * (py - y);
            match best {
                Some((_, bd)) if d2 >= bd => {}
                _ => best = Some((i, d2)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn plot(&self) -> RectF { self.plot }
}

/// A visible tooltip for one hovered glyph. Position is in container
/// coordinates so the host can place a popover without consulting the markup.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub region: usize,
    pub text: String,
    pub x: f32,
    pub y: f32,
}
