use crate::color::Color;
use crate::shape::DrawCtx;
use crate::value::{BoolProp, NumberProp};

/// Paints a small black marker square over a control point.
fn mark_point(ctx: &mut DrawCtx<'_>, x: f64, y: f64) {
    ctx.painter.begin_path();
    ctx.painter.move_to(x - 2.0, y - 2.0);
    ctx.painter.line_to(x + 2.0, y - 2.0);
    ctx.painter.line_to(x + 2.0, y + 2.0);
    ctx.painter.line_to(x - 2.0, y + 2.0);
    ctx.painter.close_path();
    ctx.painter.fill_preserve(Color::BLACK);
}

/// A quadratic Bézier curve through three points.
#[derive(Debug, Clone, Default)]
pub struct QuadCurve {
    pub x0: NumberProp,
    pub y0: NumberProp,
    pub x1: NumberProp,
    pub y1: NumberProp,
    pub x2: NumberProp,
    pub y2: NumberProp,
    /// Debug overlay marking the control points.
    pub show_points: BoolProp,
}

impl QuadCurve {
    pub fn new() -> QuadCurve {
        QuadCurve::default()
    }

    pub fn x0(mut self, v: impl Into<NumberProp>) -> QuadCurve {
        self.x0 = v.into();
        self
    }

    pub fn y0(mut self, v: impl Into<NumberProp>) -> QuadCurve {
        self.y0 = v.into();
        self
    }

    pub fn x1(mut self, v: impl Into<NumberProp>) -> QuadCurve {
        self.x1 = v.into();
        self
    }

    pub fn y1(mut self, v: impl Into<NumberProp>) -> QuadCurve {
        self.y1 = v.into();
        self
    }

    pub fn x2(mut self, v: impl Into<NumberProp>) -> QuadCurve {
        self.x2 = v.into();
        self
    }

    pub fn y2(mut self, v: impl Into<NumberProp>) -> QuadCurve {
        self.y2 = v.into();
        self
    }

    pub fn show_points(mut self, show: impl Into<BoolProp>) -> QuadCurve {
        self.show_points = show.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x0 = ctx.number(&self.x0, 20.0);
        let y0 = ctx.number(&self.y0, 10.0);
        let x1 = ctx.number(&self.x1, 100.0);
        let y1 = ctx.number(&self.y1, 200.0);
        let x2 = ctx.number(&self.x2, 180.0);
        let y2 = ctx.number(&self.y2, 10.0);

        ctx.painter.move_to(x0, y0);
        ctx.painter.quad_to(x1, y1, x2, y2);

        ctx.fill_and_stroke(false, true);

        if ctx.boolean(&self.show_points, false) {
            for (px, py) in [(x0, y0), (x1, y1), (x2, y2)] {
                mark_point(ctx, px, py);
            }
        }
    }
}

/// A cubic Bézier curve through four points.
#[derive(Debug, Clone, Default)]
pub struct BezierCurve {
    pub x0: NumberProp,
    pub y0: NumberProp,
    pub x1: NumberProp,
    pub y1: NumberProp,
    pub x2: NumberProp,
    pub y2: NumberProp,
    pub x3: NumberProp,
    pub y3: NumberProp,
    /// Debug overlay marking the control points.
    pub show_points: BoolProp,
}

impl BezierCurve {
    pub fn new() -> BezierCurve {
        BezierCurve::default()
    }

    pub fn x0(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.x0 = v.into();
        self
    }

    pub fn y0(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.y0 = v.into();
        self
    }

    pub fn x1(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.x1 = v.into();
        self
    }

    pub fn y1(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.y1 = v.into();
        self
    }

    pub fn x2(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.x2 = v.into();
        self
    }

    pub fn y2(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.y2 = v.into();
        self
    }

    pub fn x3(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.x3 = v.into();
        self
    }

    pub fn y3(mut self, v: impl Into<NumberProp>) -> BezierCurve {
        self.y3 = v.into();
        self
    }

    pub fn show_points(mut self, show: impl Into<BoolProp>) -> BezierCurve {
        self.show_points = show.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x0 = ctx.number(&self.x0, 50.0);
        let y0 = ctx.number(&self.y0, 10.0);
        let x1 = ctx.number(&self.x1, 200.0);
        let y1 = ctx.number(&self.y1, 100.0);
        let x2 = ctx.number(&self.x2, 0.0);
        let y2 = ctx.number(&self.y2, 100.0);
        let x3 = ctx.number(&self.x3, 150.0);
        let y3 = ctx.number(&self.y3, 10.0);

        ctx.painter.move_to(x0, y0);
        ctx.painter.cubic_to(x1, y1, x2, y2, x3, y3);

        ctx.fill_and_stroke(false, true);

        if ctx.boolean(&self.show_points, false) {
            for (px, py) in [(x0, y0), (x1, y1), (x2, y2), (x3, y3)] {
                mark_point(ctx, px, py);
            }
        }
    }
}
