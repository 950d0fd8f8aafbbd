//! # Property Value Resolver
//!
//! Shape properties are declarative: a property can be a fixed value, a
//! 2/3/4-point interpolation curve, a snapshot list sampled by discrete
//! index, or a closure of time. Each value domain gets its own closed
//! variant type with a `resolve(t, default)` entry point; which variant a
//! user input becomes is decided once, at construction, through the
//! `From`/`FromStr` conversions below.
//!
//! Resolution never fails. Malformed descriptors (an empty snapshot list,
//! an unrecognized boolean word) degrade to the supplied default — the
//! draw routines treat that as "use the style default". The only explicit
//! errors live in the parsing constructors.
//!
//! Out-of-range `t` is allowed to flow through the curve formulas, which
//! extrapolate; snapshot picks always clamp their index instead.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::color::Color;
use crate::error::ValueError;
use crate::painter::RasterImage;
use crate::utils::{cubic, lerp, quadratic};

/// A shared time-dependent callback producing a `T`.
///
/// Evaluated fresh on every query; idempotence (same `t`, same output) is
/// the caller's contract, not enforced here.
pub type TimeFn<T> = Arc<dyn Fn(f64) -> T + Send + Sync>;

/// Snapshot pick: `clamp(floor(t * len), 0, len - 1)`.
///
/// Returns `None` on an empty slice, which resolvers map to the default.
fn pick<T: Clone>(items: &[T], t: f64) -> Option<T> {
    debug_assert!(!items.is_empty(), "snapshot property with no entries");
    if items.is_empty() {
        return None;
    }
    let last = items.len() as isize - 1;
    let index = ((t * items.len() as f64).floor() as isize).clamp(0, last);
    Some(items[index as usize].clone())
}

/// A 2-, 3- or 4-point interpolation curve over scalar endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Linear blend between two endpoints.
    Line(f64, f64),
    /// Quadratic Bézier blend.
    Quad(f64, f64, f64),
    /// Cubic Bézier blend.
    Cubic(f64, f64, f64, f64),
}

impl Curve {
    /// Evaluates the blend at `t`. No clamping: `t` outside `[0, 1]`
    /// extrapolates along the polynomial.
    pub fn at(self, t: f64) -> f64 {
        match self {
            Curve::Line(a, b) => lerp(t, a, b),
            Curve::Quad(p0, p1, p2) => quadratic(t, p0, p1, p2),
            Curve::Cubic(p0, p1, p2, p3) => cubic(t, p0, p1, p2, p3),
        }
    }
}

// ---------------------------------------------------------------------------
// Numbers

/// A numeric property value.
#[derive(Clone, Default)]
pub enum NumberProp {
    /// Not declared; resolution yields the caller's default.
    #[default]
    Unset,
    Fixed(f64),
    Curve(Curve),
    /// Non-interpolated snapshot list.
    Steps(Vec<f64>),
    Func(TimeFn<f64>),
}

impl NumberProp {
    /// Wraps a time-dependent closure.
    pub fn func(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        NumberProp::Func(Arc::new(f))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, NumberProp::Unset)
    }

    /// Concrete value at time `t`, falling back to `default`.
    pub fn resolve(&self, t: f64, default: f64) -> f64 {
        match self {
            NumberProp::Unset => default,
            NumberProp::Fixed(v) => *v,
            NumberProp::Curve(c) => c.at(t),
            NumberProp::Steps(values) => pick(values, t).unwrap_or(default),
            NumberProp::Func(f) => f(t),
        }
    }
}

impl fmt::Debug for NumberProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberProp::Unset => f.write_str("Unset"),
            NumberProp::Fixed(v) => write!(f, "Fixed({v})"),
            NumberProp::Curve(c) => write!(f, "Curve({c:?})"),
            NumberProp::Steps(v) => write!(f, "Steps({v:?})"),
            NumberProp::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<f64> for NumberProp {
    fn from(v: f64) -> Self {
        NumberProp::Fixed(v)
    }
}

impl From<f32> for NumberProp {
    fn from(v: f32) -> Self {
        NumberProp::Fixed(v as f64)
    }
}

impl From<i32> for NumberProp {
    fn from(v: i32) -> Self {
        NumberProp::Fixed(v as f64)
    }
}

impl From<[f64; 2]> for NumberProp {
    fn from(p: [f64; 2]) -> Self {
        NumberProp::Curve(Curve::Line(p[0], p[1]))
    }
}

impl From<[f64; 3]> for NumberProp {
    fn from(p: [f64; 3]) -> Self {
        NumberProp::Curve(Curve::Quad(p[0], p[1], p[2]))
    }
}

impl From<[f64; 4]> for NumberProp {
    fn from(p: [f64; 4]) -> Self {
        NumberProp::Curve(Curve::Cubic(p[0], p[1], p[2], p[3]))
    }
}

impl From<Vec<f64>> for NumberProp {
    /// Length routing: 2/3/4 entries form an interpolation curve, longer
    /// lists become a snapshot pick, a single entry is a fixed value.
    fn from(values: Vec<f64>) -> Self {
        match values.len() {
            0 => NumberProp::Unset,
            1 => NumberProp::Fixed(values[0]),
            2 => NumberProp::Curve(Curve::Line(values[0], values[1])),
            3 => NumberProp::Curve(Curve::Quad(values[0], values[1], values[2])),
            4 => NumberProp::Curve(Curve::Cubic(values[0], values[1], values[2], values[3])),
            _ => NumberProp::Steps(values),
        }
    }
}

impl From<Curve> for NumberProp {
    fn from(c: Curve) -> Self {
        NumberProp::Curve(c)
    }
}

impl FromStr for NumberProp {
    type Err = ValueError;

    /// Integer first, float second; anything else is an explicit error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(NumberProp::Fixed(i as f64));
        }
        trimmed
            .parse::<f64>()
            .map(NumberProp::Fixed)
            .map_err(|_| ValueError::Number(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Strings

/// A string property value. Lists are snapshot-picked, never interpolated.
#[derive(Clone, Default)]
pub enum StringProp {
    #[default]
    Unset,
    Fixed(String),
    Steps(Vec<String>),
    Func(TimeFn<String>),
}

impl StringProp {
    pub fn func(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        StringProp::Func(Arc::new(f))
    }

    pub fn resolve(&self, t: f64, default: &str) -> String {
        match self {
            StringProp::Unset => default.to_owned(),
            StringProp::Fixed(s) => s.clone(),
            StringProp::Steps(items) => pick(items, t).unwrap_or_else(|| default.to_owned()),
            StringProp::Func(f) => f(t),
        }
    }
}

impl fmt::Debug for StringProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringProp::Unset => f.write_str("Unset"),
            StringProp::Fixed(s) => write!(f, "Fixed({s:?})"),
            StringProp::Steps(v) => write!(f, "Steps({v:?})"),
            StringProp::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for StringProp {
    fn from(s: &str) -> Self {
        StringProp::Fixed(s.to_owned())
    }
}

impl From<String> for StringProp {
    fn from(s: String) -> Self {
        StringProp::Fixed(s)
    }
}

impl From<Vec<String>> for StringProp {
    fn from(items: Vec<String>) -> Self {
        StringProp::Steps(items)
    }
}

impl From<Vec<&str>> for StringProp {
    fn from(items: Vec<&str>) -> Self {
        StringProp::Steps(items.into_iter().map(str::to_owned).collect())
    }
}

// ---------------------------------------------------------------------------
// Booleans

const TRUE_WORDS: [&str; 8] = ["on", "yes", "true", "1", "enable", "confirm", "y", "t"];
const FALSE_WORDS: [&str; 8] = ["off", "no", "false", "0", "disable", "cancel", "n", "f"];

/// Interprets a boolean word against the fixed token sets.
///
/// Unrecognized words yield `None` — ambiguity is signalled, not raised.
pub fn parse_bool_word(word: &str) -> Option<bool> {
    let lower = word.to_ascii_lowercase();
    if TRUE_WORDS.contains(&lower.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// A boolean property value.
#[derive(Clone, Default)]
pub enum BoolProp {
    #[default]
    Unset,
    Fixed(bool),
    /// A user-typed word resolved against the true/false token sets.
    Word(String),
    Steps(Vec<bool>),
    Func(TimeFn<bool>),
}

impl BoolProp {
    pub fn func(f: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        BoolProp::Func(Arc::new(f))
    }

    /// Value at `t`, or `None` when the descriptor is unset or an
    /// unrecognized word. Callers substitute their default for `None`.
    pub fn resolve_opt(&self, t: f64) -> Option<bool> {
        match self {
            BoolProp::Unset => None,
            BoolProp::Fixed(v) => Some(*v),
            BoolProp::Word(w) => parse_bool_word(w),
            BoolProp::Steps(items) => pick(items, t),
            BoolProp::Func(f) => Some(f(t)),
        }
    }

    pub fn resolve(&self, t: f64, default: bool) -> bool {
        self.resolve_opt(t).unwrap_or(default)
    }
}

impl fmt::Debug for BoolProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolProp::Unset => f.write_str("Unset"),
            BoolProp::Fixed(v) => write!(f, "Fixed({v})"),
            BoolProp::Word(w) => write!(f, "Word({w:?})"),
            BoolProp::Steps(v) => write!(f, "Steps({v:?})"),
            BoolProp::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<bool> for BoolProp {
    fn from(v: bool) -> Self {
        BoolProp::Fixed(v)
    }
}

impl From<&str> for BoolProp {
    fn from(word: &str) -> Self {
        BoolProp::Word(word.to_owned())
    }
}

impl From<Vec<bool>> for BoolProp {
    fn from(items: Vec<bool>) -> Self {
        BoolProp::Steps(items)
    }
}

// ---------------------------------------------------------------------------
// Arrays

/// A numeric-array property value (dash patterns, point lists).
#[derive(Clone, Default)]
pub enum ArrayProp {
    #[default]
    Unset,
    /// A concrete array, passed through unmodified — the caller wants the
    /// array itself, not a time slice of it.
    Fixed(Vec<f64>),
    /// Two same-role arrays blended element-wise: `lerp(t, from[i], to[i])`
    /// over the shorter length.
    Tween { from: Vec<f64>, to: Vec<f64> },
    Func(TimeFn<Vec<f64>>),
}

impl ArrayProp {
    pub fn func(f: impl Fn(f64) -> Vec<f64> + Send + Sync + 'static) -> Self {
        ArrayProp::Func(Arc::new(f))
    }

    pub fn resolve(&self, t: f64, default: &[f64]) -> Vec<f64> {
        match self {
            ArrayProp::Unset => default.to_vec(),
            // A single element (or none) carries no usable array shape.
            ArrayProp::Fixed(values) if values.len() > 1 => values.clone(),
            ArrayProp::Fixed(_) => default.to_vec(),
            ArrayProp::Tween { from, to } => {
                debug_assert!(!from.is_empty() && !to.is_empty(), "tween with an empty side");
                from.iter()
                    .zip(to.iter())
                    .map(|(&a, &b)| lerp(t, a, b))
                    .collect()
            }
            ArrayProp::Func(f) => f(t),
        }
    }
}

impl fmt::Debug for ArrayProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayProp::Unset => f.write_str("Unset"),
            ArrayProp::Fixed(v) => write!(f, "Fixed({v:?})"),
            ArrayProp::Tween { from, to } => write!(f, "Tween({from:?} -> {to:?})"),
            ArrayProp::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<Vec<f64>> for ArrayProp {
    fn from(values: Vec<f64>) -> Self {
        ArrayProp::Fixed(values)
    }
}

impl From<(Vec<f64>, Vec<f64>)> for ArrayProp {
    fn from((from, to): (Vec<f64>, Vec<f64>)) -> Self {
        ArrayProp::Tween { from, to }
    }
}

// ---------------------------------------------------------------------------
// Colors

/// A color property value.
///
/// `Off` is the "no paint" sentinel: a fill or stroke explicitly disabled
/// rather than merely left unset.
#[derive(Clone, Default)]
pub enum ColorProp {
    #[default]
    Unset,
    Off,
    Fixed(Color),
    /// Two-endpoint gradient, every channel lerped independently.
    Fade(Color, Color),
    /// Multi-stop gradient, piecewise-linear between consecutive stops.
    Stops(Vec<Color>),
    Func(TimeFn<Color>),
}

impl ColorProp {
    pub fn func(f: impl Fn(f64) -> Color + Send + Sync + 'static) -> Self {
        ColorProp::Func(Arc::new(f))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ColorProp::Unset)
    }

    /// Concrete color at `t`; `None` means painting is disabled.
    pub fn resolve(&self, t: f64, default: Color) -> Option<Color> {
        match self {
            ColorProp::Unset => Some(default),
            ColorProp::Off => None,
            ColorProp::Fixed(c) => Some(*c),
            ColorProp::Fade(a, b) => Some(a.lerp(*b, t)),
            ColorProp::Stops(stops) => {
                if stops.is_empty() {
                    debug_assert!(false, "color gradient with no stops");
                    Some(default)
                } else {
                    Some(Color::multi_lerp(stops, t))
                }
            }
            ColorProp::Func(f) => Some(f(t)),
        }
    }
}

impl fmt::Debug for ColorProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorProp::Unset => f.write_str("Unset"),
            ColorProp::Off => f.write_str("Off"),
            ColorProp::Fixed(c) => write!(f, "Fixed({c:?})"),
            ColorProp::Fade(a, b) => write!(f, "Fade({a:?} -> {b:?})"),
            ColorProp::Stops(v) => write!(f, "Stops({v:?})"),
            ColorProp::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<Color> for ColorProp {
    fn from(c: Color) -> Self {
        ColorProp::Fixed(c)
    }
}

impl From<&str> for ColorProp {
    fn from(s: &str) -> Self {
        ColorProp::Fixed(Color::from(s))
    }
}

impl From<u32> for ColorProp {
    fn from(argb: u32) -> Self {
        ColorProp::Fixed(Color::from_argb(argb))
    }
}

impl From<bool> for ColorProp {
    /// `false` disables painting; `true` defers to the style default.
    fn from(enabled: bool) -> Self {
        if enabled { ColorProp::Unset } else { ColorProp::Off }
    }
}

impl From<(Color, Color)> for ColorProp {
    fn from((a, b): (Color, Color)) -> Self {
        ColorProp::Fade(a, b)
    }
}

impl From<(&str, &str)> for ColorProp {
    fn from((a, b): (&str, &str)) -> Self {
        ColorProp::Fade(Color::from(a), Color::from(b))
    }
}

impl From<Vec<Color>> for ColorProp {
    /// Length routing mirroring the numeric conversion: two stops fade,
    /// more form a multi-stop gradient.
    fn from(stops: Vec<Color>) -> Self {
        match stops.len() {
            0 => ColorProp::Unset,
            1 => ColorProp::Fixed(stops[0]),
            2 => ColorProp::Fade(stops[0], stops[1]),
            _ => ColorProp::Stops(stops),
        }
    }
}

impl From<Vec<&str>> for ColorProp {
    fn from(stops: Vec<&str>) -> Self {
        ColorProp::from(stops.into_iter().map(Color::from).collect::<Vec<_>>())
    }
}

// ---------------------------------------------------------------------------
// Images

/// Shared handle to a decoded raster asset.
pub type ImageHandle = Arc<RasterImage>;

/// An image property value. Frame lists are snapshot-picked by time,
/// which is how animated sources (GIF frames) play back.
#[derive(Clone, Default)]
pub enum ImageProp {
    #[default]
    Unset,
    Fixed(ImageHandle),
    Frames(Vec<ImageHandle>),
    Func(TimeFn<ImageHandle>),
}

impl ImageProp {
    pub fn func(f: impl Fn(f64) -> ImageHandle + Send + Sync + 'static) -> Self {
        ImageProp::Func(Arc::new(f))
    }

    pub fn resolve(&self, t: f64) -> Option<ImageHandle> {
        match self {
            ImageProp::Unset => None,
            ImageProp::Fixed(img) => Some(img.clone()),
            ImageProp::Frames(frames) => pick(frames, t),
            ImageProp::Func(f) => Some(f(t)),
        }
    }
}

impl fmt::Debug for ImageProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageProp::Unset => f.write_str("Unset"),
            ImageProp::Fixed(i) => write!(f, "Fixed({}x{})", i.width, i.height),
            ImageProp::Frames(v) => write!(f, "Frames(x{})", v.len()),
            ImageProp::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<ImageHandle> for ImageProp {
    fn from(img: ImageHandle) -> Self {
        ImageProp::Fixed(img)
    }
}

impl From<RasterImage> for ImageProp {
    fn from(img: RasterImage) -> Self {
        ImageProp::Fixed(Arc::new(img))
    }
}

impl From<Vec<ImageHandle>> for ImageProp {
    fn from(frames: Vec<ImageHandle>) -> Self {
        ImageProp::Frames(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{cubic, quadratic};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn unset_yields_default() {
        assert_eq!(NumberProp::Unset.resolve(0.3, 7.0), 7.0);
        assert_eq!(StringProp::Unset.resolve(0.3, "fallback"), "fallback");
        assert_eq!(BoolProp::Unset.resolve(0.3, true), true);
        assert_eq!(ArrayProp::Unset.resolve(0.3, &[1.0, 2.0]), vec![1.0, 2.0]);
    }

    #[test]
    fn two_point_curve_is_exact_lerp() {
        let prop = NumberProp::from([3.0, 9.0]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((prop.resolve(t, 0.0) - (3.0 + 6.0 * t)).abs() < EPSILON);
        }
        assert_eq!(prop.resolve(0.0, 0.0), 3.0);
        assert_eq!(prop.resolve(1.0, 0.0), 9.0);
        // Extrapolation, not clamping.
        assert_eq!(prop.resolve(2.0, 0.0), 15.0);
    }

    #[test]
    fn three_and_four_point_curves_match_closed_forms() {
        let quad_prop = NumberProp::from([0.0, 10.0, 4.0]);
        let cubic_prop = NumberProp::from([0.0, 10.0, -5.0, 4.0]);
        for i in -5..=15 {
            let t = i as f64 / 10.0;
            assert!((quad_prop.resolve(t, 0.0) - quadratic(t, 0.0, 10.0, 4.0)).abs() < EPSILON);
            assert!(
                (cubic_prop.resolve(t, 0.0) - cubic(t, 0.0, 10.0, -5.0, 4.0)).abs() < EPSILON
            );
        }
    }

    #[test]
    fn vec_length_routing() {
        assert!(matches!(NumberProp::from(vec![1.0]), NumberProp::Fixed(v) if v == 1.0));
        assert!(matches!(NumberProp::from(vec![1.0, 2.0]), NumberProp::Curve(Curve::Line(..))));
        assert!(matches!(NumberProp::from(vec![1.0, 2.0, 3.0]), NumberProp::Curve(Curve::Quad(..))));
        assert!(matches!(
            NumberProp::from(vec![1.0, 2.0, 3.0, 4.0]),
            NumberProp::Curve(Curve::Cubic(..))
        ));
        assert!(matches!(
            NumberProp::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            NumberProp::Steps(_)
        ));
        assert!(NumberProp::from(Vec::new()).is_unset());
    }

    #[test]
    fn snapshot_pick_clamps() {
        let prop = NumberProp::Steps(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(prop.resolve(0.0, 0.0), 10.0);
        assert_eq!(prop.resolve(1.0, 0.0), 50.0);
        // Slightly outside [0, 1] must never index out of bounds.
        assert_eq!(prop.resolve(-0.2, 0.0), 10.0);
        assert_eq!(prop.resolve(1.2, 0.0), 50.0);
        // Interior picks walk the list.
        assert_eq!(prop.resolve(0.5, 0.0), 30.0);
    }

    #[test]
    fn string_steps_are_not_interpolated() {
        let prop = StringProp::from(vec!["a", "b", "c"]);
        assert_eq!(prop.resolve(0.0, ""), "a");
        assert_eq!(prop.resolve(0.4, ""), "b");
        assert_eq!(prop.resolve(1.0, ""), "c");
    }

    #[test]
    fn number_string_grammar() {
        assert!(matches!("42".parse::<NumberProp>(), Ok(NumberProp::Fixed(v)) if v == 42.0));
        assert!(matches!(" 2.5 ".parse::<NumberProp>(), Ok(NumberProp::Fixed(v)) if v == 2.5));
        assert!(matches!(
            "yolo".parse::<NumberProp>(),
            Err(ValueError::Number(s)) if s == "yolo"
        ));
    }

    #[test]
    fn bool_word_tables() {
        for word in ["on", "YES", "true", "1", "enable", "confirm", "y", "T"] {
            assert_eq!(parse_bool_word(word), Some(true), "{word}");
        }
        for word in ["off", "No", "false", "0", "disable", "cancel", "n", "F"] {
            assert_eq!(parse_bool_word(word), Some(false), "{word}");
        }
        assert_eq!(parse_bool_word("maybe"), None);

        // An unrecognized word is ambiguity, not an error: the caller's
        // default wins.
        let prop = BoolProp::from("maybe");
        assert_eq!(prop.resolve_opt(0.0), None);
        assert_eq!(prop.resolve(0.0, true), true);
        assert_eq!(prop.resolve(0.0, false), false);
    }

    #[test]
    fn paired_arrays_lerp_from_to() {
        let prop = ArrayProp::from((vec![0.0, 10.0, 100.0], vec![10.0, 20.0, 0.0]));
        assert_eq!(prop.resolve(0.0, &[]), vec![0.0, 10.0, 100.0]);
        assert_eq!(prop.resolve(1.0, &[]), vec![10.0, 20.0, 0.0]);
        assert_eq!(prop.resolve(0.5, &[]), vec![5.0, 15.0, 50.0]);
    }

    #[test]
    fn paired_arrays_use_shorter_length() {
        let prop = ArrayProp::from((vec![0.0, 10.0], vec![10.0, 20.0, 99.0]));
        assert_eq!(prop.resolve(0.5, &[]), vec![5.0, 15.0]);
    }

    #[test]
    fn plain_arrays_pass_through() {
        let dash = vec![4.0, 2.0, 1.0];
        let prop = ArrayProp::from(dash.clone());
        // Not time-resolved: same value at every t.
        assert_eq!(prop.resolve(0.0, &[]), dash);
        assert_eq!(prop.resolve(0.7, &[]), dash);
        // A single-element array means nothing; default wins.
        assert_eq!(ArrayProp::from(vec![4.0]).resolve(0.5, &[9.0]), vec![9.0]);
    }

    #[test]
    fn color_fade_and_stops() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let green = Color::rgb(0.0, 1.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);

        let fade = ColorProp::from((red, blue));
        assert_eq!(fade.resolve(0.0, Color::BLACK), Some(red));
        assert_eq!(fade.resolve(1.0, Color::BLACK), Some(blue));
        let mid = fade.resolve(0.5, Color::BLACK).unwrap();
        assert!((mid.r - 0.5).abs() < 1e-6 && (mid.b - 0.5).abs() < 1e-6);

        let stops = ColorProp::from(vec![red, green, blue]);
        assert_eq!(stops.resolve(0.0, Color::BLACK), Some(red));
        assert_eq!(stops.resolve(0.5, Color::BLACK), Some(green));
        assert_eq!(stops.resolve(1.0, Color::BLACK), Some(blue));
    }

    #[test]
    fn color_off_sentinel() {
        assert_eq!(ColorProp::Off.resolve(0.5, Color::WHITE), None);
        assert_eq!(ColorProp::from(false).resolve(0.5, Color::WHITE), None);
        // `true` defers to the default.
        assert_eq!(ColorProp::from(true).resolve(0.5, Color::WHITE), Some(Color::WHITE));
    }

    #[test]
    fn callables_see_the_query_time() {
        let prop = NumberProp::func(|t| t * 100.0);
        assert_eq!(prop.resolve(0.25, 0.0), 25.0);
        assert_eq!(prop.resolve(0.75, 0.0), 75.0);

        let color = ColorProp::func(|t| Color::gray(t as f32));
        assert_eq!(color.resolve(0.5, Color::BLACK).unwrap().r, 0.5);
    }

    #[test]
    fn image_frames_snapshot() {
        let frames: Vec<ImageHandle> = (0..4)
            .map(|i| Arc::new(RasterImage::new(i + 1, 1, vec![0; ((i + 1) * 4) as usize])))
            .collect();
        let prop = ImageProp::from(frames);
        assert_eq!(prop.resolve(0.0).unwrap().width, 1);
        assert_eq!(prop.resolve(1.0).unwrap().width, 4);
        assert_eq!(prop.resolve(1.5).unwrap().width, 4);
        assert!(ImageProp::Unset.resolve(0.5).is_none());
    }
}
