use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A heart built from two mirrored cubic curves on a unit template,
/// scaled to the requested size before painting.
#[derive(Debug, Clone, Default)]
pub struct Heart {
    pub x: NumberProp,
    pub y: NumberProp,
    pub w: NumberProp,
    pub h: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl Heart {
    pub fn new() -> Heart {
        Heart::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Heart {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Heart {
        self.y = y.into();
        self
    }

    pub fn w(mut self, w: impl Into<NumberProp>) -> Heart {
        self.w = w.into();
        self
    }

    pub fn h(mut self, h: impl Into<NumberProp>) -> Heart {
        self.h = h.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Heart {
        self.rotation = degrees.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Heart {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Heart {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let w = ctx.number(&self.w, 50.0);
        let h = ctx.number(&self.h, 50.0);

        // Unit-space template control points.
        let (x0, y0) = (0.0, -0.25);
        let (x1, y1) = (0.2, -0.8);
        let (x2, y2) = (1.1, -0.2);
        let (x3, y3) = (0.0, 0.5);

        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();

        ctx.painter.translate(x, y);
        ctx.painter.scale(sx, sy);
        ctx.painter.rotate(rotation);

        ctx.painter.save();
        ctx.painter.scale(w, h);
        ctx.painter.move_to(x0, y0);
        ctx.painter.cubic_to(x1, y1, x2, y2, x3, y3);
        ctx.painter.cubic_to(-x2, y2, -x1, y1, -x0, y0);
        ctx.painter.restore();

        ctx.fill_and_stroke(true, false);
    }
}
