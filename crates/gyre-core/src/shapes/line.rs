use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A line between two points.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub x0: NumberProp,
    pub y0: NumberProp,
    pub x1: NumberProp,
    pub y1: NumberProp,
}

impl Line {
    pub fn new() -> Line {
        Line::default()
    }

    pub fn x0(mut self, x0: impl Into<NumberProp>) -> Line {
        self.x0 = x0.into();
        self
    }

    pub fn y0(mut self, y0: impl Into<NumberProp>) -> Line {
        self.y0 = y0.into();
        self
    }

    pub fn x1(mut self, x1: impl Into<NumberProp>) -> Line {
        self.x1 = x1.into();
        self
    }

    pub fn y1(mut self, y1: impl Into<NumberProp>) -> Line {
        self.y1 = y1.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x0 = ctx.number(&self.x0, 0.0);
        let y0 = ctx.number(&self.y0, 0.0);
        let x1 = ctx.number(&self.x1, 100.0);
        let y1 = ctx.number(&self.y1, 100.0);

        ctx.painter.move_to(x0, y0);
        ctx.painter.line_to(x1, y1);

        ctx.fill_and_stroke(false, true);
    }
}
