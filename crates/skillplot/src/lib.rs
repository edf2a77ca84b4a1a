// File: crates/skillplot/src/lib.rs
// Summary: Core library entry point; exports the rating chart API.

pub mod chart;
pub mod domain;
pub mod geometry;
pub mod glyph;
pub mod hover;
pub mod sample;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod ticks;
pub mod types;

pub use chart::{ChartSurface, RenderOptions, RenderedChart};
pub use domain::{TimeDomain, ValueDomain};
pub use glyph::{Glyph, GlyphKind};
pub use hover::{HitRegions, Tooltip};
pub use sample::{OutcomeMarker, SampleError, SkillSample};
pub use theme::Theme;
pub use types::Insets;
