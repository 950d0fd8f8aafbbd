use std::f64::consts::PI;

use crate::shape::DrawCtx;
use crate::value::{BoolProp, NumberProp};

/// A rectangle with rounded corners.
#[derive(Debug, Clone, Default)]
pub struct RoundRect {
    pub x: NumberProp,
    pub y: NumberProp,
    pub w: NumberProp,
    pub h: NumberProp,
    /// Corner radius.
    pub radius: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub centered: BoolProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl RoundRect {
    pub fn new() -> RoundRect {
        RoundRect::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> RoundRect {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> RoundRect {
        self.y = y.into();
        self
    }

    pub fn w(mut self, w: impl Into<NumberProp>) -> RoundRect {
        self.w = w.into();
        self
    }

    pub fn h(mut self, h: impl Into<NumberProp>) -> RoundRect {
        self.h = h.into();
        self
    }

    pub fn radius(mut self, radius: impl Into<NumberProp>) -> RoundRect {
        self.radius = radius.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> RoundRect {
        self.rotation = degrees.into();
        self
    }

    pub fn centered(mut self, centered: impl Into<BoolProp>) -> RoundRect {
        self.centered = centered.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> RoundRect {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> RoundRect {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let w = ctx.number(&self.w, 100.0);
        let h = ctx.number(&self.h, 100.0);
        // Corners cannot outgrow the box.
        let r = ctx.number(&self.radius, 10.0).min(w * 0.5).min(h * 0.5);

        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();

        ctx.painter.translate(x, y);
        ctx.painter.scale(sx, sy);
        ctx.painter.rotate(rotation);

        if ctx.boolean(&self.centered, true) {
            ctx.painter.translate(-w * 0.5, -h * 0.5);
        }

        ctx.painter.move_to(r, 0.0);
        ctx.painter.line_to(w - r, 0.0);
        ctx.painter.arc(w - r, r, r, -PI * 0.5, 0.0);
        ctx.painter.line_to(w, h - r);
        ctx.painter.arc(w - r, h - r, r, 0.0, PI * 0.5);
        ctx.painter.line_to(r, h);
        ctx.painter.arc(r, h - r, r, PI * 0.5, PI);
        ctx.painter.line_to(0.0, r);
        ctx.painter.arc(r, r, r, PI, PI * 1.5);
        ctx.painter.close_path();

        ctx.fill_and_stroke(false, true);
    }
}
