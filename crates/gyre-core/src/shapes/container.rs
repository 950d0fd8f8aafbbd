use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// An empty shape meant to have children added to it.
///
/// The container paints nothing itself; its translation, rotation and
/// scale apply to every nested shape.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub x: NumberProp,
    pub y: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub scale_x: NumberProp,
    pub scale_y: NumberProp,
}

impl Container {
    pub fn new() -> Container {
        Container::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Container {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Container {
        self.y = y.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Container {
        self.rotation = degrees.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Container {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Container {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 0.0);
        let y = ctx.number(&self.y, 0.0);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();
        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);

        ctx.painter.translate(x, y);
        ctx.painter.rotate(rotation);
        ctx.painter.scale(sx, sy);
    }
}
