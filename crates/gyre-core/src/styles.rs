//! Default style attributes shapes fall back to when a property is unset.

use crate::color::Color;
use crate::painter::{LineCap, LineJoin};

/// Frame background: painted solid, or cleared to transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Transparent,
    Solid(Color),
}

impl From<Color> for Background {
    fn from(c: Color) -> Self {
        Background::Solid(c)
    }
}

impl From<&str> for Background {
    /// `"transparent"` selects the clearing sentinel; anything else is
    /// parsed as a color (leniently, like every color string).
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("transparent") {
            Background::Transparent
        } else {
            Background::Solid(Color::from(s))
        }
    }
}

/// The default-styles table owned by a render list.
///
/// Shapes consult it, by reference, whenever one of their own optional
/// properties is unset — a two-level lookup, per-shape first, table
/// second.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultStyles {
    pub line_width: f64,
    pub bg_color: Background,
    pub fill: Color,
    pub stroke: Color,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub line_dash: Vec<f64>,
    pub line_dash_offset: f64,
    pub miter_limit: f64,
    pub translation_x: f64,
    pub translation_y: f64,
    pub shake: f64,
}

impl Default for DefaultStyles {
    fn default() -> Self {
        DefaultStyles {
            line_width: 1.0,
            bg_color: Background::Solid(Color::WHITE),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            line_dash: Vec::new(),
            line_dash_offset: 0.0,
            miter_limit: 10.0,
            translation_x: 0.0,
            translation_y: 0.0,
            shake: 0.0,
        }
    }
}
