//! # gyre
//!
//! Declarative looping 2D vector animations rendered to raster frames.
//!
//! You describe shapes whose properties are fixed values, interpolation
//! curves (`[from, to]`, or 3/4-point Bézier blends), snapshot lists, or
//! closures of time. The engine resolves every property at a sequence of
//! normalized times — after each shape's speed/phase/loop/easing
//! transforms — rasterizes the scene, and hands the frames to an
//! encoder.
//!
//! ```no_run
//! use gyre::{Gif, Rect, Shape};
//!
//! let mut anim = gyre::animation(400, 400);
//! anim.set_duration(2.0).set_fps(30.0);
//! anim.list.add(
//!     Shape::from(Rect::new().x([100.0, 300.0]).y(200.0).w(80.0).h(80.0))
//!         .fill("tomato")
//!         .ease("bounce"),
//!     None,
//! );
//! Gif::new("bounce.gif").save(&mut anim).unwrap();
//! ```
//!
//! The facade wires the default pixmap backend; the pieces live in
//! `gyre-core` (engine), `gyre-raster` (surface) and `gyre-export`
//! (encoders) and can be used separately.

pub use gyre_core::{
    Animation, ArrayProp, Background, BezierCurve, BoolProp, Circle, Color, ColorProp, Container,
    Curve, DefaultStyles, DrawCtx, Ease, Easing, Frame, Geometry, Grid, Heart, Image, ImageHandle,
    ImageProp, Line, LineCap, LineJoin, NumberProp, Oval, Painter, Poly, QuadCurve, RasterImage,
    Ray, Rect, RenderHook, RenderList, RoundRect, Segment, Shape, ShapeId, ShapeStyle, Spiral,
    Star, StringProp, TimeFn, ValueError,
};
pub use gyre_export::{
    load_image, load_image_frames, write_gif, write_image_sequence, ExportError, Gif, GifBackend,
    GifOptions, ImageSequence, MagickDriver,
};
pub use gyre_raster::PixmapPainter;

/// An animation with the default pixmap surface at the given size.
pub fn animation(width: u32, height: u32) -> Animation {
    Animation::new(RenderList::new(
        width,
        height,
        Box::new(PixmapPainter::new(width, height)),
    ))
}
