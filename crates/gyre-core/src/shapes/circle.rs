use crate::shape::DrawCtx;
use crate::value::{BoolProp, NumberProp};

/// A circle, or an arc of one when the `start`/`end` angles are used.
///
/// With `centered` the path starts at the circle's center, which turns a
/// partial arc into a pie slice.
#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub x: NumberProp,
    pub y: NumberProp,
    pub radius: NumberProp,
    /// Start angle of the arc, degrees.
    pub start: NumberProp,
    /// End angle of the arc, degrees.
    pub end: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub centered: BoolProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl Circle {
    pub fn new() -> Circle {
        Circle::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Circle {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Circle {
        self.y = y.into();
        self
    }

    pub fn radius(mut self, radius: impl Into<NumberProp>) -> Circle {
        self.radius = radius.into();
        self
    }

    pub fn start(mut self, degrees: impl Into<NumberProp>) -> Circle {
        self.start = degrees.into();
        self
    }

    pub fn end(mut self, degrees: impl Into<NumberProp>) -> Circle {
        self.end = degrees.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Circle {
        self.rotation = degrees.into();
        self
    }

    pub fn centered(mut self, centered: impl Into<BoolProp>) -> Circle {
        self.centered = centered.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Circle {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Circle {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let radius = ctx.number(&self.radius, 50.0);
        let start = ctx.number(&self.start, 0.0).to_radians();
        let end = ctx.number(&self.end, 360.0).to_radians();
        let centered = ctx.boolean(&self.centered, false);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();
        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);

        ctx.painter.translate(x, y);
        ctx.painter.rotate(rotation);
        ctx.painter.scale(sx, sy);

        if centered {
            ctx.painter.move_to(0.0, 0.0);
        }

        ctx.painter.arc(0.0, 0.0, radius, start, end);

        if centered {
            ctx.painter.close_path();
        }

        ctx.fill_and_stroke(true, false);
    }
}
