// File: crates/skillplot/src/theme.rs
// Summary: Light/Dark theming for chart colors, as CSS color strings.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub band_fill: &'static str,
    pub line_stroke: &'static str,
    pub point_fill: &'static str,
    pub win_fill: &'static str,
    pub loss_fill: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            band_fill: "rgba(64,160,255,0.25)",
            line_stroke: "#40a0ff",
            point_fill: "#9ccaff",
            win_fill: "#28c878",
            loss_fill: "#dc5050",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            band_fill: "rgba(32,120,200,0.20)",
            line_stroke: "#2078c8",
            point_fill: "#14508c",
            win_fill: "#14a05a",
            loss_fill: "#c83c3c",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
