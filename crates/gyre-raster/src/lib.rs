//! # gyre-raster
//!
//! The default drawing surface for gyre: a [`Painter`] implementation
//! over a CPU `tiny_skia::Pixmap`.
//!
//! Semantics follow the classic canvas model the geometry drawers were
//! written against: the current transform applies to coordinates as path
//! verbs are issued (so a drawer can scale path geometry, pop the scale,
//! and still stroke with an unscaled line width), and `*_preserve`
//! painting leaves the current path intact.
//!
//! The pixmap stores premultiplied alpha; [`Painter::frame`] converts to
//! the straight RGBA the frame-buffer contract expects.

use gyre_core::painter::{Frame, LineCap, LineJoin, Painter, RasterImage};
use gyre_core::Color;

use kurbo::{Affine, BezPath, PathEl, Point, Vec2};
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, Pixmap, PixmapPaint, Stroke, StrokeDash, Transform,
};

#[derive(Debug, Clone)]
struct GfxState {
    transform: Affine,
    line_width: f64,
    line_cap: LineCap,
    line_join: LineJoin,
    miter_limit: f64,
    dash: Option<(Vec<f64>, f64)>,
}

impl Default for GfxState {
    fn default() -> Self {
        GfxState {
            transform: Affine::IDENTITY,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: None,
        }
    }
}

/// CPU painter over a `tiny_skia::Pixmap`.
pub struct PixmapPainter {
    pixmap: Pixmap,
    state: GfxState,
    stack: Vec<GfxState>,
    /// Current path in device space (points are transformed as added).
    path: BezPath,
    current: Option<Point>,
    subpath_start: Option<Point>,
}

impl PixmapPainter {
    pub fn new(width: u32, height: u32) -> PixmapPainter {
        PixmapPainter {
            pixmap: make_pixmap(width, height),
            state: GfxState::default(),
            stack: Vec::new(),
            path: BezPath::new(),
            current: None,
            subpath_start: None,
        }
    }

    fn device(&self, x: f64, y: f64) -> Point {
        self.state.transform * Point::new(x, y)
    }

    fn skia_path(&self) -> Option<tiny_skia::Path> {
        if self.path.elements().is_empty() {
            return None;
        }
        let mut pb = tiny_skia::PathBuilder::new();
        for el in self.path.elements() {
            match *el {
                PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
                PathEl::QuadTo(p1, p2) => {
                    pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
                }
                PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                    p1.x as f32,
                    p1.y as f32,
                    p2.x as f32,
                    p2.y as f32,
                    p3.x as f32,
                    p3.y as f32,
                ),
                PathEl::ClosePath => pb.close(),
            }
        }
        pb.finish()
    }

    fn stroke_config(&self) -> Stroke {
        Stroke {
            width: self.state.line_width as f32,
            miter_limit: self.state.miter_limit as f32,
            line_cap: match self.state.line_cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match self.state.line_join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            dash: self.state.dash.as_ref().and_then(|(pattern, offset)| {
                // An odd-length pattern repeats itself, canvas-style.
                let mut array: Vec<f32> = pattern.iter().map(|&v| v as f32).collect();
                if array.len() % 2 == 1 {
                    array.extend_from_slice(&array.clone());
                }
                StrokeDash::new(array, *offset as f32)
            }),
        }
    }
}

impl Painter for PixmapPainter {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == self.pixmap.width() && height == self.pixmap.height() {
            // Same dimensions: keep the surface, just reset state.
            self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        } else {
            self.pixmap = make_pixmap(width, height);
        }
        self.state = GfxState::default();
        self.stack.clear();
        self.path = BezPath::new();
        self.current = None;
        self.subpath_start = None;
    }

    fn fork(&self) -> Box<dyn Painter> {
        Box::new(PixmapPainter::new(self.pixmap.width(), self.pixmap.height()))
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        debug_assert!(!self.stack.is_empty(), "restore without a matching save");
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * Affine::translate(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform * Affine::rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
    }

    fn set_miter_limit(&mut self, limit: f64) {
        self.state.miter_limit = limit;
    }

    fn set_dash(&mut self, pattern: &[f64], offset: f64) {
        self.state.dash = if pattern.is_empty() {
            None
        } else {
            Some((pattern.to_vec(), offset))
        };
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
        self.current = None;
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        self.path.move_to(p);
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(x, y);
            return;
        }
        let p = self.device(x, y);
        self.path.line_to(p);
        self.current = Some(p);
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(cx, cy);
        }
        let c = self.device(cx, cy);
        let p = self.device(x, y);
        self.path.quad_to(c, p);
        self.current = Some(p);
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(c1x, c1y);
        }
        let c1 = self.device(c1x, c1y);
        let c2 = self.device(c2x, c2y);
        let p = self.device(x, y);
        self.path.curve_to(c1, c2, p);
        self.current = Some(p);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        if radius <= 0.0 {
            return;
        }

        // Sweep is always positive; an end angle behind the start is
        // lifted by full turns, canvas-style.
        let mut sweep = end_angle - start_angle;
        while sweep < 0.0 {
            sweep += std::f64::consts::TAU;
        }

        let start = Point::new(
            cx + radius * start_angle.cos(),
            cy + radius * start_angle.sin(),
        );
        if self.current.is_some() {
            self.line_to(start.x, start.y);
        } else {
            self.move_to(start.x, start.y);
        }

        let arc = kurbo::Arc {
            center: Point::new(cx, cy),
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle: sweep,
            x_rotation: 0.0,
        };
        let mut segments: Vec<(Point, Point, Point)> = Vec::new();
        arc.to_cubic_beziers(0.01, |p1, p2, p3| segments.push((p1, p2, p3)));
        for (p1, p2, p3) in segments {
            self.cubic_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
        }
    }

    fn close_path(&mut self) {
        if self.current.is_some() {
            self.path.close_path();
            // The current point returns to the start of the subpath.
            self.current = self.subpath_start;
        }
    }

    fn fill_preserve(&mut self, color: Color) {
        let Some(path) = self.skia_path() else { return };
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_preserve(&mut self, color: Color) {
        if self.state.line_width <= 0.0 {
            return;
        }
        let Some(path) = self.skia_path() else { return };
        let stroke = self.stroke_config();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn paint(&mut self, color: Color) {
        self.pixmap.fill(skia_color(color));
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
    ) {
        let Some(src) = premultiplied_pixmap(image) else {
            tracing::warn!(
                width = image.width,
                height = image.height,
                "skipping image with inconsistent buffer"
            );
            return;
        };

        let sw = image.width as f64;
        let sh = image.height as f64;
        let w = width.unwrap_or(sw);
        let h = height.unwrap_or(sh);

        let placement = self.state.transform
            * Affine::translate(Vec2::new(x, y))
            * Affine::scale_non_uniform(w / sw, h / sh);

        let paint = PixmapPaint {
            opacity: 1.0,
            blend_mode: BlendMode::SourceOver,
            quality: FilterQuality::Bilinear,
        };
        self.pixmap
            .draw_pixmap(0, 0, src.as_ref(), &paint, skia_transform(placement), None);
    }

    fn frame(&self) -> Frame {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Frame::new(self.pixmap.width(), self.pixmap.height(), data)
    }
}

fn make_pixmap(width: u32, height: u32) -> Pixmap {
    Pixmap::new(width.max(1), height.max(1)).expect("allocating pixmap surface")
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(
        color.r.clamp(0.0, 1.0),
        color.g.clamp(0.0, 1.0),
        color.b.clamp(0.0, 1.0),
        color.a.clamp(0.0, 1.0),
    )
    .unwrap_or(tiny_skia::Color::BLACK)
}

fn skia_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

fn premultiplied_pixmap(image: &RasterImage) -> Option<Pixmap> {
    if image.pixels.len() != (image.width * image.height * 4) as usize {
        return None;
    }
    let mut data = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(4) {
        let c = tiny_skia::ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let size = tiny_skia::IntSize::from_wh(image.width, image.height)?;
    Pixmap::from_vec(data, size)
}
