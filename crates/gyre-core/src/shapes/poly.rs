use std::f64::consts::PI;

use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A regular polygon.
#[derive(Debug, Clone, Default)]
pub struct Poly {
    pub x: NumberProp,
    pub y: NumberProp,
    pub radius: NumberProp,
    pub sides: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
}

impl Poly {
    pub fn new() -> Poly {
        Poly::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Poly {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Poly {
        self.y = y.into();
        self
    }

    pub fn radius(mut self, radius: impl Into<NumberProp>) -> Poly {
        self.radius = radius.into();
        self
    }

    pub fn sides(mut self, sides: impl Into<NumberProp>) -> Poly {
        self.sides = sides.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Poly {
        self.rotation = degrees.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let radius = ctx.number(&self.radius, 50.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();
        let sides = ctx.number(&self.sides, 5.0) as i64;

        ctx.painter.translate(x, y);
        ctx.painter.rotate(rotation);
        ctx.painter.move_to(radius, 0.0);

        for i in 1..sides.max(1) {
            let angle = PI * 2.0 / sides as f64 * i as f64;
            ctx.painter.line_to(angle.cos() * radius, angle.sin() * radius);
        }
        ctx.painter.line_to(radius, 0.0);

        ctx.fill_and_stroke(false, true);
    }
}
