use std::f64::consts::PI;

use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A star: points alternating between an outer and an inner radius.
#[derive(Debug, Clone, Default)]
pub struct Star {
    pub x: NumberProp,
    pub y: NumberProp,
    pub inner_radius: NumberProp,
    pub outer_radius: NumberProp,
    pub points: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl Star {
    pub fn new() -> Star {
        Star::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Star {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Star {
        self.y = y.into();
        self
    }

    pub fn inner_radius(mut self, radius: impl Into<NumberProp>) -> Star {
        self.inner_radius = radius.into();
        self
    }

    pub fn outer_radius(mut self, radius: impl Into<NumberProp>) -> Star {
        self.outer_radius = radius.into();
        self
    }

    pub fn points(mut self, points: impl Into<NumberProp>) -> Star {
        self.points = points.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Star {
        self.rotation = degrees.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Star {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Star {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let inner_radius = ctx.number(&self.inner_radius, 25.0);
        let outer_radius = ctx.number(&self.outer_radius, 50.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();
        let points = (ctx.number(&self.points, 5.0) as i64).max(2);
        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);

        ctx.painter.translate(x, y);
        ctx.painter.scale(sx, sy);
        ctx.painter.rotate(rotation);
        ctx.painter.move_to(outer_radius, 0.0);

        for i in 1..points * 2 {
            let angle = PI * 2.0 / points as f64 / 2.0 * i as f64;
            let r = if i % 2 == 1 { inner_radius } else { outer_radius };
            ctx.painter.line_to(angle.cos() * r, angle.sin() * r);
        }
        ctx.painter.close_path();

        ctx.fill_and_stroke(true, false);
    }
}
