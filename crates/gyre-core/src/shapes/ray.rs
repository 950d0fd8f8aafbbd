use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A line given as a starting point plus angle and length.
#[derive(Debug, Clone, Default)]
pub struct Ray {
    pub x: NumberProp,
    pub y: NumberProp,
    /// Degrees.
    pub angle: NumberProp,
    pub length: NumberProp,
}

impl Ray {
    pub fn new() -> Ray {
        Ray::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Ray {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Ray {
        self.y = y.into();
        self
    }

    pub fn angle(mut self, degrees: impl Into<NumberProp>) -> Ray {
        self.angle = degrees.into();
        self
    }

    pub fn length(mut self, length: impl Into<NumberProp>) -> Ray {
        self.length = length.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let angle = ctx.number(&self.angle, 0.0).to_radians();
        let length = ctx.number(&self.length, 100.0);

        ctx.painter.translate(x, y);
        ctx.painter.rotate(angle);
        ctx.painter.move_to(0.0, 0.0);
        ctx.painter.line_to(length, 0.0);

        ctx.fill_and_stroke(false, true);
    }
}
