use crate::shape::DrawCtx;
use crate::value::{BoolProp, NumberProp};

/// An oval, or an ovoidal arc.
///
/// Built as a unit circle under a non-uniform scale that is popped
/// before painting, so stroke widths stay unscaled.
#[derive(Debug, Clone, Default)]
pub struct Oval {
    pub x: NumberProp,
    pub y: NumberProp,
    /// Horizontal radius.
    pub rx: NumberProp,
    /// Vertical radius.
    pub ry: NumberProp,
    /// Start angle of the arc, degrees.
    pub start: NumberProp,
    /// End angle of the arc, degrees.
    pub end: NumberProp,
    /// Degrees.
    pub rotation: NumberProp,
    pub centered: BoolProp,
}

impl Oval {
    pub fn new() -> Oval {
        Oval::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Oval {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Oval {
        self.y = y.into();
        self
    }

    pub fn rx(mut self, rx: impl Into<NumberProp>) -> Oval {
        self.rx = rx.into();
        self
    }

    pub fn ry(mut self, ry: impl Into<NumberProp>) -> Oval {
        self.ry = ry.into();
        self
    }

    pub fn start(mut self, degrees: impl Into<NumberProp>) -> Oval {
        self.start = degrees.into();
        self
    }

    pub fn end(mut self, degrees: impl Into<NumberProp>) -> Oval {
        self.end = degrees.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Oval {
        self.rotation = degrees.into();
        self
    }

    pub fn centered(mut self, centered: impl Into<BoolProp>) -> Oval {
        self.centered = centered.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 100.0);
        let y = ctx.number(&self.y, 100.0);
        let rx = ctx.number(&self.rx, 50.0);
        let ry = ctx.number(&self.ry, 50.0);
        let start = ctx.number(&self.start, 0.0).to_radians();
        let end = ctx.number(&self.end, 360.0).to_radians();
        let centered = ctx.boolean(&self.centered, false);
        let rotation = ctx.number(&self.rotation, 0.0).to_radians();

        ctx.painter.translate(x, y);
        ctx.painter.rotate(rotation);

        ctx.painter.save();
        ctx.painter.scale(rx * 0.01, ry * 0.01);

        if centered {
            ctx.painter.move_to(0.0, 0.0);
        }

        ctx.painter.arc(0.0, 0.0, 100.0, start, end);

        if centered {
            ctx.painter.close_path();
        }

        ctx.painter.restore();

        ctx.fill_and_stroke(true, false);
    }
}
