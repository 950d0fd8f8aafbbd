use crate::shape::DrawCtx;
use crate::value::NumberProp;

/// A travelling portion of a line.
///
/// The visible piece slides from the start of the line to the end over
/// the animation cycle; the eased time drives the motion directly.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    pub x0: NumberProp,
    pub y0: NumberProp,
    pub x1: NumberProp,
    pub y1: NumberProp,
    /// Length of the drawn piece.
    pub length: NumberProp,
}

impl Segment {
    pub fn new() -> Segment {
        Segment::default()
    }

    pub fn x0(mut self, x0: impl Into<NumberProp>) -> Segment {
        self.x0 = x0.into();
        self
    }

    pub fn y0(mut self, y0: impl Into<NumberProp>) -> Segment {
        self.y0 = y0.into();
        self
    }

    pub fn x1(mut self, x1: impl Into<NumberProp>) -> Segment {
        self.x1 = x1.into();
        self
    }

    pub fn y1(mut self, y1: impl Into<NumberProp>) -> Segment {
        self.y1 = y1.into();
        self
    }

    pub fn length(mut self, length: impl Into<NumberProp>) -> Segment {
        self.length = length.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let x0 = ctx.number(&self.x0, 0.0);
        let y0 = ctx.number(&self.y0, 0.0);
        let x1 = ctx.number(&self.x1, 100.0);
        let y1 = ctx.number(&self.y1, 100.0);
        let segment_length = ctx.number(&self.length, 50.0);

        let dx = x1 - x0;
        let dy = y1 - y0;
        let angle = dy.atan2(dx);
        let dist = dx.hypot(dy);

        let mut start = -0.01;
        let mut end = (dist + segment_length) * ctx.t;

        if end > segment_length {
            start = end - segment_length;
        }
        if end > dist {
            end = dist + 0.01;
        }

        ctx.painter.translate(x0, y0);
        ctx.painter.rotate(angle);
        ctx.painter.move_to(start, 0.0);
        ctx.painter.line_to(end, 0.0);

        ctx.fill_and_stroke(false, true);
    }
}
