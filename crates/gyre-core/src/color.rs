//! # Color model
//!
//! RGBA colors with all components in `0.0..=1.0`, plus the gradient
//! interpolation used by animated color properties.
//!
//! String parsing accepts CSS hex notation and X11/CSS color names.
//! The strict entry point is [`Color::parse`]; the `From<&str>`
//! conversion is lenient and falls back to black, which is what the
//! declarative builder API wants for user-typed names.

use crate::error::ValueError;
use crate::utils::lerp;

use palette::{FromColor, Hsl, Hsv, Srgb};
use rand::Rng;

/// An RGBA color. All components are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    /// A shade of gray.
    pub const fn gray(shade: f32) -> Color {
        Color { r: shade, g: shade, b: shade, a: 1.0 }
    }

    /// From hue (degrees, `0..360`), saturation, value and alpha.
    pub fn hsva(hue: f32, saturation: f32, value: f32, alpha: f32) -> Color {
        let rgb = Srgb::from_color(Hsv::new(hue, saturation, value));
        Color { r: rgb.red, g: rgb.green, b: rgb.blue, a: alpha }
    }

    /// From hue (degrees, `0..360`), saturation, lightness and alpha.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
        let rgb = Srgb::from_color(Hsl::new(hue, saturation, lightness));
        Color { r: rgb.red, g: rgb.green, b: rgb.blue, a: alpha }
    }

    /// From a packed `0xAARRGGBB` integer.
    pub fn from_argb(argb: u32) -> Color {
        let a = (argb >> 24) & 0xff;
        let r = (argb >> 16) & 0xff;
        let g = (argb >> 8) & 0xff;
        let b = argb & 0xff;
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parses a CSS color string: `#rgb`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(..)` and friends, or an X11/CSS color name.
    pub fn parse(input: &str) -> Result<Color, ValueError> {
        let c = csscolorparser::parse(input).map_err(|e| ValueError::Color {
            input: input.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Color::rgba(c.r as f32, c.g as f32, c.b as f32, c.a as f32))
    }

    /// An opaque random color.
    pub fn random() -> Color {
        let mut rng = rand::thread_rng();
        Color::rgb(rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0))
    }

    /// A random gray in `[min, max]`.
    pub fn random_gray(min: f32, max: f32) -> Color {
        let mut rng = rand::thread_rng();
        Color::gray(rng.gen_range(min..=max))
    }

    pub fn with_alpha(self, a: f32) -> Color {
        Color { a, ..self }
    }

    /// This color in HSV, hue in degrees `0..360`.
    pub fn in_hsv(self) -> (f32, f32, f32) {
        let hsv = Hsv::from_color(Srgb::new(self.r, self.g, self.b));
        (hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
    }

    /// This color in HSL, hue in degrees `0..360`.
    pub fn in_hsl(self) -> (f32, f32, f32) {
        let hsl = Hsl::from_color(Srgb::new(self.r, self.g, self.b));
        (hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness)
    }

    /// Lightens by `amount` (a delta in `0..=100`).
    pub fn lighten(self, amount: f32) -> Color {
        let (h, s, l) = self.in_hsl();
        Color::hsla(h, s, (l + amount / 100.0).clamp(0.0, 1.0), self.a)
    }

    /// Darkens by `amount` (a delta in `0..=100`).
    pub fn darken(self, amount: f32) -> Color {
        let (h, s, l) = self.in_hsl();
        Color::hsla(h, s, (l - amount / 100.0).clamp(0.0, 1.0), self.a)
    }

    /// Saturates by `amount` (a delta in `0..=100`).
    pub fn saturate(self, amount: f32) -> Color {
        let (h, s, v) = self.in_hsv();
        Color::hsva(h, (s + amount / 100.0).clamp(0.0, 1.0), v, self.a)
    }

    /// Desaturates by `amount` (a delta in `0..=100`).
    pub fn desaturate(self, amount: f32) -> Color {
        let (h, s, v) = self.in_hsv();
        Color::hsva(h, (s - amount / 100.0).clamp(0.0, 1.0), v, self.a)
    }

    /// Fully desaturated copy.
    pub fn grayscale(self) -> Color {
        self.desaturate(100.0)
    }

    /// Channel-wise linear interpolation toward `other`, alpha included.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        Color {
            r: lerp(t, self.r as f64, other.r as f64) as f32,
            g: lerp(t, self.g as f64, other.g as f64) as f32,
            b: lerp(t, self.b as f64, other.b as f64) as f32,
            a: lerp(t, self.a as f64, other.a as f64) as f32,
        }
    }

    /// Piecewise-linear interpolation across a list of stops.
    ///
    /// `t` is scaled by `len - 1`; the bracketing pair is selected by
    /// `floor` and blended by the fractional remainder. Indices are
    /// clamped, so out-of-range `t` holds the end stops.
    pub fn multi_lerp(colors: &[Color], t: f64) -> Color {
        debug_assert!(!colors.is_empty(), "multi_lerp needs at least one stop");
        match colors {
            [] => Color::BLACK,
            [only] => *only,
            _ => {
                let last = colors.len() - 1;
                let tt = t * last as f64;
                let base = tt.floor();
                let prev = (base as isize).clamp(0, last as isize) as usize;
                let next = (base as isize + 1).clamp(0, last as isize) as usize;
                colors[prev].lerp(colors[next], tt - base)
            }
        }
    }

    /// Packs into 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quant = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [quant(self.r), quant(self.g), quant(self.b), quant(self.a)]
    }
}

impl From<&str> for Color {
    /// Lenient parse: an unrecognized string becomes black.
    fn from(input: &str) -> Self {
        Color::parse(input).unwrap_or_else(|err| {
            tracing::warn!(%err, "unparsable color, using black");
            Color::BLACK
        })
    }
}

impl From<u32> for Color {
    /// Packed `0xAARRGGBB`.
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn parse_hex_and_names() {
        let red = Color::parse("#ff0000").unwrap();
        assert!(close(red.r, 1.0) && close(red.g, 0.0) && close(red.b, 0.0));
        assert!(close(red.a, 1.0));

        let tomato = Color::parse("tomato").unwrap();
        assert!(tomato.r > 0.9 && tomato.g < 0.5);

        assert!(Color::parse("not-a-color-at-all").is_err());
    }

    #[test]
    fn lenient_parse_falls_back_to_black() {
        assert_eq!(Color::from("not-a-color-at-all"), Color::BLACK);
    }

    #[test]
    fn argb_unpacking() {
        let c = Color::from_argb(0x80FF0000);
        assert!(close(c.r, 1.0) && close(c.g, 0.0) && close(c.b, 0.0));
        assert!(close(c.a, 128.0 / 255.0));
    }

    #[test]
    fn lerp_blends_all_channels() {
        let a = Color::rgba(0.0, 0.0, 0.0, 0.0);
        let b = Color::rgba(1.0, 1.0, 1.0, 1.0);
        let mid = a.lerp(b, 0.5);
        assert!(close(mid.r, 0.5) && close(mid.a, 0.5));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn multi_lerp_hits_stops() {
        let stops = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0), Color::rgb(0.0, 0.0, 1.0)];
        assert_eq!(Color::multi_lerp(&stops, 0.0), stops[0]);
        assert_eq!(Color::multi_lerp(&stops, 0.5), stops[1]);
        assert_eq!(Color::multi_lerp(&stops, 1.0), stops[2]);

        // Between stops: halfway through the first segment.
        let q = Color::multi_lerp(&stops, 0.25);
        assert!(close(q.r, 0.5) && close(q.g, 0.5) && close(q.b, 0.0));

        // Out-of-range t holds the ends instead of indexing out of bounds.
        assert_eq!(Color::multi_lerp(&stops, 1.4), stops[2]);
        assert_eq!(Color::multi_lerp(&stops, -0.4), stops[0]);
    }

    #[test]
    fn hsl_deltas_clamp() {
        let c = Color::rgb(0.5, 0.2, 0.2);
        let lighter = c.lighten(20.0);
        let (_, _, l0) = c.in_hsl();
        let (_, _, l1) = lighter.in_hsl();
        assert!(l1 > l0);
        assert_eq!(c.lighten(200.0).in_hsl().2, 1.0);
    }

    #[test]
    fn grayscale_kills_saturation() {
        let (_, s, _) = Color::rgb(0.9, 0.1, 0.4).grayscale().in_hsv();
        assert!(close(s, 0.0));
    }

    #[test]
    fn rgba8_rounding() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::rgba(0.5, 0.0, 1.0, 0.0).to_rgba8(), [128, 0, 255, 0]);
    }
}
