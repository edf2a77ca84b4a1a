// File: crates/skillplot/src/chart.rs
// Summary: ChartSurface render pipeline: domains, grid, axes, band, line, glyphs, hover wiring.

use anyhow::Result;
use chrono::Duration;

use crate::domain::{TimeDomain, ValueDomain};
use crate::geometry::RectF;
use crate::glyph::{outcome_label, skill_label, triangle_path, Glyph, GlyphKind};
use crate::hover::{HitRegions, Tooltip};
use crate::sample::{OutcomeMarker, SkillSample};
use crate::scale::{TimeScale, ValueScale};
use crate::svg::{estimate_text_width, SvgBuilder};
use crate::theme::Theme;
use crate::ticks;
use crate::types::{Insets, HEIGHT, WIDTH};

const LABEL_SIZE: f32 = 11.0;
const LABEL_ROTATION_DEG: f32 = 35.0;
const TICK_MARK_LEN: f32 = 6.0;
const TRIANGLE_AREA: f32 = 25.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Skip axis label text when the host draws its own labels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
        }
    }
}

/// Output of one render pass: the markup plus the parallel glyph registry and
/// hit regions the hover dispatch consults. Replaced wholesale on re-render.
pub struct RenderedChart {
    pub svg: String,
    pub glyphs: Vec<Glyph>,
    pub regions: HitRegions,
    pub time_domain: TimeDomain,
    pub value_domain: ValueDomain,
    insets: Insets,
}

impl RenderedChart {
    pub fn glyph(&self, region: usize) -> Option<&Glyph> {
        self.glyphs.get(region)
    }
}

/// Owns the chart output for one host container: the current rendering and at
/// most one open tooltip. Each render tears both down before drawing anew, so
/// repeated calls never accumulate stale markup or orphaned popovers.
pub struct ChartSurface {
    theme: Theme,
    rendered: Option<RenderedChart>,
    tooltip: Option<Tooltip>,
}

impl ChartSurface {
    pub fn new(theme: Theme) -> Self {
        Self { theme, rendered: None, tooltip: None }
    }

    /// Full redraw from the three input series. Stateless with respect to
    /// prior renders; the surface only carries the latest output.
    pub fn render(
        &mut self,
        history: &[SkillSample],
        wins: &[OutcomeMarker],
        losses: &[OutcomeMarker],
        opts: &RenderOptions,
    ) -> Result<&RenderedChart> {
        self.tooltip = None;
        self.rendered = None;
        let rendered = render_chart(history, wins, losses, opts, &self.theme)?;
        Ok(self.rendered.insert(rendered))
    }

    pub fn rendered(&self) -> Option<&RenderedChart> {
        self.rendered.as_ref()
    }

    pub fn svg(&self) -> Option<&str> {
        self.rendered.as_ref().map(|r| r.svg.as_str())
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Pointer moved to `(x, y)` in container coordinates. Entering a new
    /// region shows that glyph's tooltip (replacing any prior one); moving
    /// outside the plot dismisses it. Returns true when the tooltip changed.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        let Some(r) = self.rendered.as_ref() else {
            return self.dismiss();
        };
        let px = x - r.insets.left as f32;
        let py = y - r.insets.top as f32;
        match r.regions.locate(px, py) {
            Some(region) => {
                if self.tooltip.as_ref().map(|t| t.region) == Some(region) {
                    return false;
                }
                let Some(g) = r.glyph(region) else {
                    return self.dismiss();
                };
                self.tooltip = Some(Tooltip {
                    region,
                    text: g.label.clone(),
                    x: g.x + r.insets.left as f32,
                    y: g.y + r.insets.top as f32,
                });
                true
            }
            None => self.dismiss(),
        }
    }

    /// Pointer left the container entirely.
    pub fn pointer_left(&mut self) -> bool {
        self.dismiss()
    }

    fn dismiss(&mut self) -> bool {
        self.tooltip.take().is_some()
    }
}

fn render_chart(
    history: &[SkillSample],
    wins: &[OutcomeMarker],
    losses: &[OutcomeMarker],
    opts: &RenderOptions,
    theme: &Theme,
) -> Result<RenderedChart> {
    let plot_w = (opts.width - opts.insets.hsum() as i32) as f32;
    let plot_h = (opts.height - opts.insets.vsum() as i32) as f32;
    if plot_w <= 0.0 || plot_h <= 0.0 {
        anyhow::bail!("container {}x{} too small for margins", opts.width, opts.height);
    }

    let time_domain = TimeDomain::from_history(history)
        .ok_or_else(|| anyhow::anyhow!("skill history is empty"))?;
    let value_domain = ValueDomain::from_data(history, wins, losses)
        .ok_or_else(|| anyhow::anyhow!("no finite rating values"))?;

    let x = TimeScale::new(&time_domain, 0.0, plot_w);
    let y = ValueScale::new_linear(&value_domain, 0.0, plot_h);

    let x_ticks = ticks::time_ticks(&time_domain, ticks::time_tick_count(plot_w, &time_domain));
    let y_ticks = ticks::value_ticks(
        value_domain.min,
        value_domain.max,
        ticks::value_tick_count(plot_h),
    );

    let mut svg = SvgBuilder::new(opts.width, opts.height, theme.background);
    svg.open_group(
        "plot",
        Some(&format!("translate({},{})", opts.insets.left, opts.insets.top)),
    );

    draw_grid(&mut svg, &x, &y, &x_ticks, &y_ticks, theme);
    draw_axes(&mut svg, &x, &y, &x_ticks, &y_ticks, opts, theme);
    draw_band(&mut svg, history, &x, &y, time_domain.degenerate, theme);
    draw_skill_line(&mut svg, history, &x, &y, theme);

    let mut glyphs = Vec::with_capacity(history.len() + wins.len() + losses.len());
    draw_skill_points(&mut svg, history, &x, &y, theme, &mut glyphs);
    draw_outcome_markers(&mut svg, wins, GlyphKind::Win, &x, &y, theme, &mut glyphs);
    draw_outcome_markers(&mut svg, losses, GlyphKind::Loss, &x, &y, theme, &mut glyphs);

    svg.close_group();

    let plot = RectF::from_ltwh(0.0, 0.0, plot_w, plot_h);
    let regions = HitRegions::new(plot, &glyphs);

    Ok(RenderedChart {
        svg: svg.finish(),
        glyphs,
        regions,
        time_domain,
        value_domain,
        insets: opts.insets,
    })
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    svg: &mut SvgBuilder,
    x: &TimeScale,
    y: &ValueScale,
    x_ticks: &[chrono::DateTime<chrono::Utc>],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let plot_w = x.right_px;
    let plot_h = y.bottom_px;
    svg.open_group("grid", None);
    for &t in x_ticks {
        let tx = x.to_px(t);
        svg.line(tx, 0.0, tx, plot_h, theme.grid);
    }
    for &v in y_ticks {
        let ty = y.to_px(v);
        svg.line(0.0, ty, plot_w, ty, theme.grid);
    }
    svg.close_group();
}

fn draw_axes(
    svg: &mut SvgBuilder,
    x: &TimeScale,
    y: &ValueScale,
    x_ticks: &[chrono::DateTime<chrono::Utc>],
    y_ticks: &[f64],
    opts: &RenderOptions,
    theme: &Theme,
) {
    let plot_w = x.right_px;
    let plot_h = y.bottom_px;
    svg.open_group("x axis", None);
    svg.line(0.0, plot_h, plot_w, plot_h, theme.axis_line);
    for &t in x_ticks {
        let tx = x.to_px(t);
        svg.line(tx, plot_h, tx, plot_h + TICK_MARK_LEN, theme.axis_line);
        if !opts.draw_labels {
            continue;
        }
        let label = ticks::format_time_tick(t);
        // Anchor point of the rotated label, mirroring the original layout:
        // pulled back ~0.8em along the baseline, nudged down past the tick.
        let lx = tx - LABEL_SIZE * 0.8;
        let ly = plot_h + TICK_MARK_LEN + LABEL_SIZE * 0.6;
        // Prune labels whose rotated extent would overflow the plot's left
        // edge; gridlines and tick marks are kept, only text is dropped.
        let left_edge = lx - estimate_text_width(&label, LABEL_SIZE)
            * LABEL_ROTATION_DEG.to_radians().cos();
        if left_edge < 0.0 {
            continue;
        }
        svg.text(
            lx,
            ly,
            &label,
            LABEL_SIZE,
            theme.axis_label,
            "end",
            Some(&format!("rotate(-{} {:.1} {:.1})", LABEL_ROTATION_DEG, lx, ly)),
        );
    }
    svg.close_group();

    svg.open_group("y axis", None);
    svg.line(0.0, 0.0, 0.0, plot_h, theme.axis_line);
    let step = ticks::tick_step(y.vmin, y.vmax, ticks::value_tick_count(plot_h));
    for &v in y_ticks {
        let ty = y.to_px(v);
        svg.line(-TICK_MARK_LEN, ty, 0.0, ty, theme.axis_line);
        if opts.draw_labels {
            svg.text(
                -TICK_MARK_LEN - 3.0,
                ty + LABEL_SIZE * 0.35,
                &ticks::format_value_tick(v, step),
                LABEL_SIZE,
                theme.axis_label,
                "end",
                None,
            );
        }
    }
    svg.close_group();
}

/// Confidence band across all samples. A zero-extent time domain would make
/// an area path invisible, so the degenerate case draws one rectangle per
/// sample spanning timestamp ± 1 day instead.
fn draw_band(
    svg: &mut SvgBuilder,
    history: &[SkillSample],
    x: &TimeScale,
    y: &ValueScale,
    degenerate: bool,
    theme: &Theme,
) {
    if degenerate {
        for s in history {
            let x0 = x.to_px(s.at - Duration::days(1));
            let x1 = x.to_px(s.at + Duration::days(1));
            let y_top = y.to_px(s.upper);
            let y_bot = y.to_px(s.lower);
            svg.rect("skill_interval", x0, y_top, x1 - x0, y_bot - y_top, theme.band_fill);
        }
        return;
    }

    let mut d = String::new();
    for (i, s) in history.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.1},{:.1}", cmd, x.to_px(s.at), y.to_px(s.upper)));
    }
    for s in history.iter().rev() {
        d.push_str(&format!("L{:.1},{:.1}", x.to_px(s.at), y.to_px(s.lower)));
    }
    d.push('Z');
    svg.path("skill_interval", &d, theme.band_fill, "none", 1.0, None);
}

fn draw_skill_line(
    svg: &mut SvgBuilder,
    history: &[SkillSample],
    x: &TimeScale,
    y: &ValueScale,
    theme: &Theme,
) {
    let mut d = String::new();
    for (i, s) in history.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.1},{:.1}", cmd, x.to_px(s.at), y.to_px(s.mean)));
    }
    svg.path("skill_line", &d, "none", theme.line_stroke, 2.0, None);
}

fn draw_skill_points(
    svg: &mut SvgBuilder,
    history: &[SkillSample],
    x: &TimeScale,
    y: &ValueScale,
    theme: &Theme,
    glyphs: &mut Vec<Glyph>,
) {
    for s in history {
        let gx = x.to_px(s.at);
        let gy = y.to_px(s.mean);
        svg.circle("skill_point", gx, gy, 2.0, theme.point_fill);
        glyphs.push(Glyph {
            kind: GlyphKind::SkillPoint,
            x: gx,
            y: gy,
            label: skill_label(s),
        });
    }
}

fn draw_outcome_markers(
    svg: &mut SvgBuilder,
    markers: &[OutcomeMarker],
    kind: GlyphKind,
    x: &TimeScale,
    y: &ValueScale,
    theme: &Theme,
    glyphs: &mut Vec<Glyph>,
) {
    let (class, fill) = match kind {
        GlyphKind::Win => ("win_point", theme.win_fill),
        GlyphKind::Loss => ("loss_point", theme.loss_fill),
        GlyphKind::SkillPoint => unreachable!("skill points are circles"),
    };
    let d = triangle_path(TRIANGLE_AREA);
    for m in markers {
        let gx = x.to_px(m.at);
        let gy = y.to_px(m.rating);
        let transform = match kind {
            // Losses point downward.
            GlyphKind::Loss => format!("translate({:.1},{:.1}) rotate(180)", gx, gy),
            _ => format!("translate({:.1},{:.1})", gx, gy),
        };
        svg.path(class, &d, fill, "none", 1.0, Some(&transform));
        glyphs.push(Glyph {
            kind,
            x: gx,
            y: gy,
            label: outcome_label(m),
        });
    }
}
