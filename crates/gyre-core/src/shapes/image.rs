use crate::shape::DrawCtx;
use crate::value::{BoolProp, ImageProp, NumberProp};

/// A raster image, optionally animated through a frame list.
///
/// Width and height default to the asset's natural size.
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub img: ImageProp,
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

impl Image {
    pub fn new(img: impl Into<ImageProp>) -> Image {
        Image { img: img.into(), ..Image::default() }
    }

    pub fn x(mut self, x: impl Into<NumberProp>) -> Image {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<NumberProp>) -> Image {
        self.y = y.into();
        self
    }

    pub fn w(mut self, w: impl Into<NumberProp>) -> Image {
        self.w = w.into();
        self
    }

    pub fn h(mut self, h: impl Into<NumberProp>) -> Image {
        self.h = h.into();
        self
    }

    pub fn rotation(mut self, degrees: impl Into<NumberProp>) -> Image {
        self.rotation = degrees.into();
        self
    }

    pub fn centered(mut self, centered: impl Into<BoolProp>) -> Image {
        self.centered = centered.into();
        self
    }

    pub fn scale_x(mut self, sx: impl Into<NumberProp>) -> Image {
        self.scale_x = sx.into();
        self
    }

    pub fn scale_y(mut self, sy: impl Into<NumberProp>) -> Image {
        self.scale_y = sy.into();
        self
    }

    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let Some(image) = self.img.resolve(ctx.t) else {
            return;
        };

        let x = ctx.number(&self.x, 0.0);
        let y = ctx.number(&self.y, 0.0);
        let w = match &self.w {
            prop if prop.is_unset() => image.width as f64,
            prop => ctx.number(prop, image.width as f64),
        };
        let h = match &self.h {
            prop if prop.is_unset() => image.height as f64,
            prop => ctx.number(prop, image.height as f64),
        };

        let rotation = ctx.number(&self.rotation, 0.0).to_radians();
        let sx = ctx.number(&self.scale_x, 1.0);
        let sy = ctx.number(&self.scale_y, 1.0);

        ctx.painter.translate(x, y);
        ctx.painter.rotate(rotation);
        ctx.painter.scale(sx, sy);

        let (ox, oy) = if ctx.boolean(&self.centered, false) {
            (-w * 0.5, -h * 0.5)
        } else {
            (0.0, 0.0)
        };

        ctx.painter.draw_image(&image, ox, oy, Some(w), Some(h));
    }
}
