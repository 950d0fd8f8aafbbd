//! # Easing Function Library
//!
//! A fixed catalog of named unary `[0,1] -> [0,1]` timing functions.
//! Every function maps 0 to 0 and 1 to 1; the shape in between controls
//! the perceived acceleration of an animation cycle.
//!
//! Shapes select easing through [`Ease`], which also admits arbitrary
//! user closures. Name lookup is deliberately lenient: an unknown name
//! behaves exactly like `"linear"` and never raises — easing names are
//! user-typed strings.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// A named easing function from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    Sine,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Bounce,
    Circular,
    Exponential,
    Back,
    Elastic,
}

impl Easing {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Easing; 11] = [
        Easing::Linear,
        Easing::Sine,
        Easing::Quadratic,
        Easing::Cubic,
        Easing::Quartic,
        Easing::Quintic,
        Easing::Bounce,
        Easing::Circular,
        Easing::Exponential,
        Easing::Back,
        Easing::Elastic,
    ];

    /// The canonical lowercase name for this function.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Sine => "sine",
            Easing::Quadratic => "quadratic",
            Easing::Cubic => "cubic",
            Easing::Quartic => "quartic",
            Easing::Quintic => "quintic",
            Easing::Bounce => "bounce",
            Easing::Circular => "circular",
            Easing::Exponential => "exponential",
            Easing::Back => "back",
            Easing::Elastic => "elastic",
        }
    }

    /// Looks up a catalog entry by name.
    pub fn by_name(name: &str) -> Option<Easing> {
        Easing::ALL.iter().copied().find(|e| e.name() == name)
    }

    /// Evaluates the function at `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => linear(t),
            Easing::Sine => sine(t),
            Easing::Quadratic => quadratic(t),
            Easing::Cubic => cubic(t),
            Easing::Quartic => quartic(t),
            Easing::Quintic => quintic(t),
            Easing::Bounce => bounce(t),
            Easing::Circular => circular(t),
            Easing::Exponential => exponential(t),
            Easing::Back => back(t),
            Easing::Elastic => elastic(t),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn linear(t: f64) -> f64 {
    t
}

pub fn sine(t: f64) -> f64 {
    0.5 - (t * PI).cos() * 0.5
}

pub fn quadratic(t: f64) -> f64 {
    let tt = 2.0 * t * t;
    if t <= 0.5 {
        tt
    } else {
        -tt + 4.0 * t - 1.0
    }
}

pub fn cubic(t: f64) -> f64 {
    if t <= 0.5 {
        t * t * t * 4.0
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * (u * u * u) + 1.0
    }
}

pub fn quartic(t: f64) -> f64 {
    if t <= 0.5 {
        8.0 * (t * t * t * t)
    } else {
        let u = t - 1.0;
        -8.0 * (u * u * u * u) + 1.0
    }
}

pub fn quintic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        (t * t * t * t * t) / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u * u * u + 2.0) / 2.0
    }
}

pub fn bounce(t: f64) -> f64 {
    // Piecewise parabolas; breakpoints at 4/11, 8/11 and 9/10.
    const A: f64 = 0.363_636_363_636_363_65;
    const B: f64 = 0.727_272_727_272_727_3;
    const C: f64 = 0.9;

    let tt = t * t;

    if t < A {
        7.5625 * tt
    } else if t < B {
        9.075 * tt - 9.9 * t + 3.4
    } else if t < C {
        12.066_481_994_459_833 * tt - 19.635_457_063_711_91 * t + 8.898_060_941_828_255
    } else {
        10.8 * tt - 20.52 * t + 10.72
    }
}

pub fn circular(t: f64) -> f64 {
    if t <= 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * t * t).sqrt())
    } else {
        0.5 * (((3.0 - 2.0 * t) * (2.0 * t - 1.0)).sqrt() + 1.0)
    }
}

pub fn exponential(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    if t <= 0.5 {
        0.5 * 2.0_f64.powf(20.0 * t - 10.0)
    } else {
        -0.5 * 2.0_f64.powf(10.0 - t * 20.0) + 1.0
    }
}

pub fn back(t: f64) -> f64 {
    let f = if t <= 0.5 { 2.0 * t } else { 1.0 - (2.0 * t - 1.0) };
    let g = (f * f * f) - f * (f * PI).sin();

    if t <= 0.5 {
        0.5 * g
    } else {
        0.5 * (1.0 - g) + 0.5
    }
}

pub fn elastic(t: f64) -> f64 {
    if t <= 0.5 {
        0.5 * (13.0 * (PI * 0.5) * 2.0 * t).sin() * 2.0_f64.powf(10.0 * (2.0 * t - 1.0))
    } else {
        0.5 * (-13.0 * (PI * 0.5) * ((2.0 * t - 1.0) + 1.0)).sin()
            * 2.0_f64.powf(-10.0 * (2.0 * t - 1.0))
            + 1.0
    }
}

/// The easing selector carried by shapes and render lists.
///
/// Either a catalog entry or an arbitrary time-shaping closure.
#[derive(Clone)]
pub enum Ease {
    Named(Easing),
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Ease {
    /// Wraps a custom time-shaping closure.
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Ease::Custom(Arc::new(f))
    }

    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Ease::Named(e) => e.apply(t),
            Ease::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Named(e) => write!(f, "Ease::Named({e})"),
            Ease::Custom(_) => f.write_str("Ease::Custom(..)"),
        }
    }
}

impl From<Easing> for Ease {
    fn from(e: Easing) -> Self {
        Ease::Named(e)
    }
}

impl From<&str> for Ease {
    /// Lenient lookup: an unrecognized name degrades to linear.
    fn from(name: &str) -> Self {
        match Easing::by_name(name) {
            Some(e) => Ease::Named(e),
            None => {
                tracing::debug!(name, "unknown easing name, falling back to linear");
                Ease::Named(Easing::Linear)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn all_functions_pin_endpoints() {
        for easing in Easing::ALL {
            let start = easing.apply(0.0);
            let end = easing.apply(1.0);
            assert!(start.abs() < 1e-6, "{easing}(0) = {start}");
            assert!((end - 1.0).abs() < 1e-6, "{easing}(1) = {end}");
        }
    }

    #[test]
    fn sine_midpoint() {
        assert!((sine(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn quadratic_matches_halves() {
        assert!((quadratic(0.25) - 0.125).abs() < EPSILON);
        assert!((quadratic(0.75) - 0.875).abs() < EPSILON);
    }

    #[test]
    fn bounce_stays_in_range() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let v = bounce(t);
            assert!((-0.01..=1.01).contains(&v), "bounce({t}) = {v}");
        }
    }

    #[test]
    fn back_overshoots_midway() {
        // The whole point of "back" is anticipation below zero early on.
        let min = (0..50)
            .map(|i| back(i as f64 / 100.0))
            .fold(f64::INFINITY, f64::min);
        assert!(min < 0.0, "back never dipped below zero (min {min})");
    }

    #[test]
    fn name_roundtrip() {
        for easing in Easing::ALL {
            assert_eq!(Easing::by_name(easing.name()), Some(easing));
        }
        assert_eq!(Easing::by_name("wobbly"), None);
    }

    #[test]
    fn unknown_name_behaves_like_linear() {
        let unknown = Ease::from("definitely-not-an-easing");
        let linear = Ease::from("linear");
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_eq!(unknown.apply(t), linear.apply(t));
        }
    }

    #[test]
    fn custom_closure_is_used_verbatim() {
        let ease = Ease::custom(|t| t * t);
        assert_eq!(ease.apply(0.5), 0.25);
    }
}
