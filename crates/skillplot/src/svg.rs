// File: crates/skillplot/src/svg.rs
// Summary: Minimal string-based SVG markup builder used by the render pipeline.

/// Accumulates SVG elements into a document string. Coordinates are written
/// with one decimal; callers pass plot-space values inside a translated group.
pub struct SvgBuilder {
    buf: String,
    open_groups: usize,
}

impl SvgBuilder {
    pub fn new(width: i32, height: i32, background: &str) -> Self {
        let mut buf = String::with_capacity(4096);
        buf.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" preserveAspectRatio="xMinYMin meet" viewBox="0 0 {} {}">"#,
            width, height,
        ));
        buf.push_str(&format!(
            r#"<rect class="background" width="{}" height="{}" fill="{}"/>"#,
            width, height, background,
        ));
        Self { buf, open_groups: 0 }
    }

    pub fn open_group(&mut self, class: &str, transform: Option<&str>) {
        match transform {
            Some(t) => self.buf.push_str(&format!(r#"<g class="{}" transform="{}">"#, class, t)),
            None => self.buf.push_str(&format!(r#"<g class="{}">"#, class)),
        }
        self.open_groups += 1;
    }

    pub fn close_group(&mut self) {
        if self.open_groups > 0 {
            self.buf.push_str("</g>");
            self.open_groups -= 1;
        }
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str) {
        self.buf.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}"/>"#,
            x1, y1, x2, y2, stroke,
        ));
    }

    pub fn path(
        &mut self,
        class: &str,
        d: &str,
        fill: &str,
        stroke: &str,
        stroke_width: f32,
        transform: Option<&str>,
    ) {
        match transform {
            Some(t) => self.buf.push_str(&format!(
                r#"<path class="{}" d="{}" fill="{}" stroke="{}" stroke-width="{:.1}" transform="{}"/>"#,
                class, d, fill, stroke, stroke_width, t,
            )),
            None => self.buf.push_str(&format!(
                r#"<path class="{}" d="{}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                class, d, fill, stroke, stroke_width,
            )),
        }
    }

    pub fn rect(&mut self, class: &str, x: f32, y: f32, w: f32, h: f32, fill: &str) {
        self.buf.push_str(&format!(
            r#"<rect class="{}" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            class, x, y, w, h, fill,
        ));
    }

    pub fn circle(&mut self, class: &str, cx: f32, cy: f32, r: f32, fill: &str) {
        self.buf.push_str(&format!(
            r#"<circle class="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            class, cx, cy, r, fill,
        ));
    }

    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        size: f32,
        fill: &str,
        anchor: &str,
        transform: Option<&str>,
    ) {
        let escaped = escape(content);
        match transform {
            Some(t) => self.buf.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="{}" transform="{}">{}</text>"#,
                x, y, size, fill, anchor, t, escaped,
            )),
            None => self.buf.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="{}">{}</text>"#,
                x, y, size, fill, anchor, escaped,
            )),
        }
    }

    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.buf.push_str("</g>");
            self.open_groups -= 1;
        }
        self.buf.push_str("</svg>");
        self.buf
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rough pixel width of a run of label text at the given font size. Good
/// enough for overflow pruning; no font metrics are available here.
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.6
}
