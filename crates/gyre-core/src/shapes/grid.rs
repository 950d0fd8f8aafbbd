use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A grid of horizontal and vertical lines.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub x: NumberProp,
    pub y: NumberProp,
    pub w: NumberProp,
    pub h: NumberProp,
    /// Cell size.
    pub size: NumberProp,
}

impl Grid {
    pub fn new() -> Grid {
        Grid::default()
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Grid {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Grid {
        self.y = y.into();
        self
    }

    pub fn w(mut self, w: impl Into<NumberProp>) -> Grid {
        self.w = w.into();
        self
    }

    pub fn h(mut self, h: impl Into<NumberProp>) -> Grid {
        self.h = h.into();
        self
    }

    pub fn size(mut self, size: impl Into<NumberProp>) -> Grid {
        self.size = size.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x = ctx.number(&self.x, 0.0);
        let y = ctx.number(&self.y, 0.0);
        let w = ctx.number(&self.w, 100.0);
        let h = ctx.number(&self.h, 100.0);
        let size = ctx.number(&self.size, 20.0);

        if size <= 0.0 {
            return;
        }

        let mut row = y;
        while row <= y + h {
            ctx.painter.move_to(x, row);
            ctx.painter.line_to(x + w, row);
            row += size;
        }

        let mut col = x;
        while col <= x + w {
            ctx.painter.move_to(col, y);
            ctx.painter.line_to(col, y + h);
            col += size;
        }

        ctx.fill_and_stroke(false, true);
    }
}
