//! # Shape nodes
//!
//! A [`Shape`] pairs a geometry drawer with the optional common style
//! properties every drawer shares, an easing selector and a loop flag
//! (both inheritable from the owning render list), and the ids of its
//! child shapes.
//!
//! ## Time pipeline
//!
//! Each render call transforms the global frame time for this shape:
//!
//! 1. `t = time * speed_mult + phase` (both resolvable, so speed and
//!    phase may themselves animate against the raw frame time);
//! 2. wrap into `[0, 1)`;
//! 3. ping-pong reshape when the loop flag is set (`0 -> 1 -> 0` across
//!    the cycle);
//! 4. the effective easing function.
//!
//! The result is the *eased time* handed to the geometry drawer and to
//! every property resolution of that call. Children do not see it: they
//! re-run their own pipeline from the original frame time, and only the
//! painter's transform stack composes across the parent/child boundary.

use rand::Rng;

use crate::easing::Ease;
use crate::painter::{LineCap, LineJoin, Painter};
use crate::render_list::ShapeId;
use crate::shapes::Geometry;
use crate::styles::DefaultStyles;
use crate::value::{ArrayProp, BoolProp, ColorProp, NumberProp};

/// The optional style properties common to every shape kind.
///
/// Unset entries fall back to the render list's [`DefaultStyles`] at
/// draw time.
#[derive(Debug, Clone, Default)]
pub struct ShapeStyle {
    pub speed_mult: NumberProp,
    pub phase: NumberProp,
    pub translation_x: NumberProp,
    pub translation_y: NumberProp,
    pub line_width: NumberProp,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
    pub miter_limit: NumberProp,
    pub line_dash: ArrayProp,
    pub shake: NumberProp,
    pub fill: ColorProp,
    pub stroke: ColorProp,
    pub stroke_before: BoolProp,
}

/// A drawable node in a render list.
#[derive(Debug, Clone)]
pub struct Shape {
    pub geometry: Geometry,
    pub style: ShapeStyle,
    /// `None` inherits the render list's easing at insertion.
    pub ease: Option<Ease>,
    /// `None` inherits the render list's loop flag at insertion.
    pub looping: Option<bool>,
    pub(crate) children: Vec<ShapeId>,
}

impl Shape {
    pub fn new(geometry: impl Into<Geometry>) -> Shape {
        Shape {
            geometry: geometry.into(),
            style: ShapeStyle::default(),
            ease: None,
            looping: None,
            children: Vec::new(),
        }
    }

    /// Ids of this shape's children, in insertion (paint) order.
    pub fn children(&self) -> &[ShapeId] {
        &self.children
    }

    // Chainable style setters -----------------------------------------

    pub fn fill(mut self, fill: impl Into<ColorProp>) -> Shape {
        self.style.fill = fill.into();
        self
    }

    pub fn stroke(mut self, stroke: impl Into<ColorProp>) -> Shape {
        self.style.stroke = stroke.into();
        self
    }

    pub fn line_width(mut self, width: impl Into<NumberProp>) -> Shape {
        self.style.line_width = width.into();
        self
    }

    pub fn line_cap(mut self, cap: LineCap) -> Shape {
        self.style.line_cap = Some(cap);
        self
    }

    pub fn line_join(mut self, join: LineJoin) -> Shape {
        self.style.line_join = Some(join);
        self
    }

    pub fn miter_limit(mut self, limit: impl Into<NumberProp>) -> Shape {
        self.style.miter_limit = limit.into();
        self
    }

    pub fn line_dash(mut self, dash: impl Into<ArrayProp>) -> Shape {
        self.style.line_dash = dash.into();
        self
    }

    pub fn translation(
        mut self,
        x: impl Into<NumberProp>,
        y: impl Into<NumberProp>,
    ) -> Shape {
        self.style.translation_x = x.into();
        self.style.translation_y = y.into();
        self
    }

    pub fn shake(mut self, amount: impl Into<NumberProp>) -> Shape {
        self.style.shake = amount.into();
        self
    }

    pub fn speed_mult(mut self, speed: impl Into<NumberProp>) -> Shape {
        self.style.speed_mult = speed.into();
        self
    }

    pub fn phase(mut self, phase: impl Into<NumberProp>) -> Shape {
        self.style.phase = phase.into();
        self
    }

    /// Strokes under the fill instead of over it.
    pub fn stroke_before(mut self, before: impl Into<BoolProp>) -> Shape {
        self.style.stroke_before = before.into();
        self
    }

    pub fn ease(mut self, ease: impl Into<Ease>) -> Shape {
        self.ease = Some(ease.into());
        self
    }

    pub fn looping(mut self, looping: bool) -> Shape {
        self.looping = Some(looping);
        self
    }

    // Time pipeline ---------------------------------------------------

    /// Runs the full per-shape time pipeline for a frame at `time`.
    pub fn local_time(&self, time: f64) -> f64 {
        let speed = self.style.speed_mult.resolve(time, 1.0);
        let phase = self.style.phase.resolve(time, 0.0);
        self.reshape(time * speed + phase)
    }

    /// Wrap, optional ping-pong loop, then easing.
    pub fn reshape(&self, t: f64) -> f64 {
        let mut t = t.rem_euclid(1.0);

        if self.looping.unwrap_or(false) {
            t = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
        }

        match &self.ease {
            Some(ease) => ease.apply(t),
            None => t,
        }
    }

    // Draw bracketing -------------------------------------------------

    pub(crate) fn start_draw(&self, painter: &mut dyn Painter, defaults: &DefaultStyles, t: f64) {
        painter.save();

        painter.set_line_width(self.style.line_width.resolve(t, defaults.line_width));
        painter.set_line_cap(self.style.line_cap.unwrap_or(defaults.line_cap));
        painter.set_line_join(self.style.line_join.unwrap_or(defaults.line_join));
        painter.set_miter_limit(self.style.miter_limit.resolve(t, defaults.miter_limit));

        painter.translate(
            self.style.translation_x.resolve(t, defaults.translation_x),
            self.style.translation_y.resolve(t, defaults.translation_y),
        );

        let shake = self.style.shake.resolve(t, defaults.shake);
        if shake > 0.0 {
            let mut rng = rand::thread_rng();
            painter.translate(rng.gen_range(-shake..=shake), rng.gen_range(-shake..=shake));
        }

        let dash = self.style.line_dash.resolve(t, &defaults.line_dash);
        if !dash.is_empty() {
            painter.set_dash(&dash, defaults.line_dash_offset);
        }

        painter.begin_path();
    }

    pub(crate) fn draw(&self, painter: &mut dyn Painter, defaults: &DefaultStyles, t: f64) {
        let mut ctx = DrawCtx { painter, t, style: &self.style, defaults };
        self.geometry.draw(&mut ctx);
    }

    pub(crate) fn end_draw(&self, painter: &mut dyn Painter) {
        painter.close_path();
        painter.restore();
    }
}

/// Per-call drawing context handed to geometry drawers: the painter, the
/// eased time, and resolution against the two-level style lookup.
pub struct DrawCtx<'a> {
    pub painter: &'a mut dyn Painter,
    pub t: f64,
    style: &'a ShapeStyle,
    defaults: &'a DefaultStyles,
}

impl DrawCtx<'_> {
    pub fn number(&self, prop: &NumberProp, default: f64) -> f64 {
        prop.resolve(self.t, default)
    }

    pub fn boolean(&self, prop: &BoolProp, default: bool) -> bool {
        prop.resolve(self.t, default)
    }

    /// Paints the current path.
    ///
    /// `do_fill`/`do_stroke` are the drawer's own defaults, consulted
    /// only when the respective color property is unset. An `Off`
    /// property always suppresses that paint. `stroke_before` flips the
    /// usual fill-then-stroke order.
    pub fn fill_and_stroke(&mut self, do_fill: bool, do_stroke: bool) {
        let t = self.t;

        let fill = match &self.style.fill {
            ColorProp::Unset if do_fill => Some(self.defaults.fill),
            ColorProp::Unset => None,
            prop => prop.resolve(t, self.defaults.fill),
        };
        let stroke = match &self.style.stroke {
            ColorProp::Unset if do_stroke => Some(self.defaults.stroke),
            ColorProp::Unset => None,
            prop => prop.resolve(t, self.defaults.stroke),
        };

        if self.style.stroke_before.resolve(t, false) {
            if let Some(color) = stroke {
                self.painter.stroke_preserve(color);
            }
            if let Some(color) = fill {
                self.painter.fill_preserve(color);
            }
        } else {
            if let Some(color) = fill {
                self.painter.fill_preserve(color);
            }
            if let Some(color) = stroke {
                self.painter.stroke_preserve(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{Ease, Easing};
    use crate::shapes::Rect;

    fn plain(looping: bool) -> Shape {
        Shape::new(Rect::new()).ease(Easing::Linear).looping(looping)
    }

    #[test]
    fn ping_pong_reshape() {
        let shape = plain(true);
        assert_eq!(shape.reshape(0.0), 0.0);
        assert_eq!(shape.reshape(0.25), 0.5);
        assert_eq!(shape.reshape(0.5), 1.0);
        assert_eq!(shape.reshape(0.75), 0.5);
        // Approaches zero again at the end of the cycle.
        assert!(shape.reshape(0.999) < 0.01);
    }

    #[test]
    fn ping_pong_is_continuous_at_the_apex() {
        let shape = plain(true);
        let eps = 1e-9;
        let before = shape.reshape(0.5 - eps);
        let after = shape.reshape(0.5 + eps);
        assert!((before - 1.0).abs() < 1e-6);
        assert!((after - 1.0).abs() < 1e-6);
    }

    #[test]
    fn no_loop_passes_wrapped_time_through() {
        let shape = plain(false);
        assert_eq!(shape.reshape(0.25), 0.25);
        assert_eq!(shape.reshape(1.25), 0.25);
        assert_eq!(shape.reshape(-0.25), 0.75);
        // Exactly 1.0 wraps to the start of the next cycle.
        assert_eq!(shape.reshape(1.0), 0.0);
    }

    #[test]
    fn phase_and_speed_shift_the_clock() {
        let shape = plain(false).phase(0.25);
        assert_eq!(shape.local_time(0.5), 0.75);

        let fast = plain(false).speed_mult(2.0);
        assert_eq!(fast.local_time(0.25), 0.5);
        // Wraps once past a full cycle.
        assert_eq!(fast.local_time(0.75), 0.5);
    }

    #[test]
    fn animated_phase_resolves_against_frame_time() {
        // Phase itself interpolates 0 -> 0.5 across the animation.
        let shape = plain(false).phase([0.0, 0.5]);
        assert_eq!(shape.local_time(0.0), 0.0);
        assert_eq!(shape.local_time(0.5), 0.75);
    }

    #[test]
    fn easing_applies_last() {
        let shape = plain(true).ease(Ease::custom(|t| t * t));
        // wrap(0.25) = 0.25, loop -> 0.5, ease -> 0.25
        assert_eq!(shape.reshape(0.25), 0.25);
    }

    #[test]
    fn unset_ease_and_loop_are_inherit_sentinels() {
        let shape = Shape::new(Rect::new());
        assert!(shape.ease.is_none());
        assert!(shape.looping.is_none());
        // Until inherited, reshape treats them as linear / no loop.
        assert_eq!(shape.reshape(0.3), 0.3);
    }
}
