use crate::shape::DrawCtx;
use crate::value::{BoolProp, NumberProp};

/// A rectangle.
///
/// Drawn from its center by default (`centered`), or from the top-left
/// corner when disabled. Scale applies before rotation, which is what
/// makes the cheap isometric trick work.
#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: NumberProp,
    pub y: NumberProp,
    pub w: NumberProp,
    pub h: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub centered: BoolProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl Rect {
    pub fn new() -> Rect {
        Rect::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Rect {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Rect {
        self.y = y.into();
        self
    }

    pub fn w(mut self, w: impl Into<NumberProp>) -> Rect {
        self.w = w.into();
        self
    }

    pub fn h(mut self, h: impl Into<NumberProp>) -> Rect {
        self.h = h.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Rect {
        self.rotation = degrees.into();
        self
    }

    pub fn centered(mut self, centered: impl Into<BoolProp>) -> Rect {
        self.centered = centered.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Rect {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Rect {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let w = ctx.number(&self.w, 100.0);
        let h = ctx.number(&self.h, 100.0);
        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();

        ctx.painter.translate(x, y);
        ctx.painter.scale(sx, sy);
        ctx.painter.rotate(rotation);

        let (left, top) = if ctx.boolean(&self.centered, true) {
            (-w * 0.5, -h * 0.5)
        } else {
            (0.0, 0.0)
        };

        ctx.painter.move_to(left, top);
        ctx.painter.line_to(left + w, top);
        ctx.painter.line_to(left + w, top + h);
        ctx.painter.line_to(left, top + h);
        ctx.painter.close_path();

        ctx.fill_and_stroke(false, true);
    }
}
