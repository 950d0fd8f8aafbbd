use std::f64::consts::PI;

use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// An Archimedean spiral, approximated by short line segments.
///
/// Negative `turns` wind the other way.
#[derive(Debug, Clone, Default)]
pub struct Spiral {
    pub x: NumberProp,
    pub y: NumberProp,
    pub inner_radius: NumberProp,
    pub outer_radius: NumberProp,
    pub turns: NumberProp,
    /// Angular resolution of the segment approximation, degrees.
    pub res: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl Spiral {
    pub fn new() -> Spiral {
        Spiral::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Spiral {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Spiral {
        self.y = y.into();
        self
    }

    pub fn inner_radius(mut self, radius: impl Into<NumberProp>) -> Spiral {
        self.inner_radius = radius.into();
        self
    }

    pub fn outer_radius(mut self, radius: impl Into<NumberProp>) -> Spiral {
        self.outer_radius = radius.into();
        self
    }

    pub fn turns(mut self, turns: impl Into<NumberProp>) -> Spiral {
        self.turns = turns.into();
        self
    }

    pub fn res(mut self, degrees: impl Into<NumberProp>) -> Spiral {
        self.res = degrees.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Spiral {
        self.rotation = degrees.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Spiral {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Spiral {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let inner_radius = ctx.number(&self.inner_radius, 10.0);
        let outer_radius = ctx.number(&self.outer_radius, 90.0);
        let turns = ctx.number(&self.turns, 6.0);
        let res = ctx.number(&self.res, 1.0).to_radians().abs().max(1e-3);
        let full_angle = PI * 2.0 * turns;
        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();

        ctx.painter.translate(x, y);
        ctx.painter.scale(sx, sy);
        ctx.painter.rotate(rotation);

        if full_angle > 0.0 {
            let mut a = 0.0;
            while a < full_angle {
                let r = inner_radius + (outer_radius - inner_radius) * a / full_angle;
                ctx.painter.line_to(a.cos() * r, a.sin() * r);
                a += res;
            }
        } else if full_angle < 0.0 {
            let mut a = 0.0;
            while a > full_angle {
                let r = inner_radius + (outer_radius - inner_radius) * a / full_angle;
                ctx.painter.line_to(a.cos() * r, a.sin() * r);
                a -= res;
            }
        }

        ctx.fill_and_stroke(false, true);
    }
}
