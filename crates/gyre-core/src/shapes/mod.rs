//! Geometry drawers.
//!
//! Each kind resolves its own properties at the eased time and turns
//! them into path + fill/stroke calls through the shared draw-context
//! bracketing. The set is closed: a drawer is one arm of [`Geometry`].

mod circle;
mod container;
mod curves;
mod grid;
mod heart;
mod image;
mod line;
mod oval;
mod poly;
mod ray;
mod rect;
mod roundrect;
mod segment;
mod spiral;
mod star;

pub use circle::Circle;
pub use container::Container;
pub use curves::{BezierCurve, QuadCurve};
pub use grid::Grid;
pub use heart::Heart;
pub use image::Image;
pub use line::Line;
pub use oval::Oval;
pub use poly::Poly;
pub use ray::Ray;
pub use rect::Rect;
pub use roundrect::RoundRect;
pub use segment::Segment;
pub use spiral::Spiral;
pub use star::Star;

use crate::shape::DrawCtx;

/// The closed set of geometry drawers.
#[derive(Debug, Clone)]
pub enum Geometry {
    Container(Container),
    Rect(Rect),
    RoundRect(RoundRect),
    Circle(Circle),
    Oval(Oval),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Poly(Poly),
    Star(Star),
    Spiral(Spiral),
    Grid(Grid),
    Heart(Heart),
    QuadCurve(QuadCurve),
    BezierCurve(BezierCurve),
    Image(Image),
}

impl Geometry {
    pub(crate) fn draw(&self, ctx: &mut DrawCtx<'_>) {
        match self {
            Geometry::Container(s) => s.draw(ctx),
            Geometry::Rect(s) => s.draw(ctx),
            Geometry::RoundRect(s) => s.draw(ctx),
            Geometry::Circle(s) => s.draw(ctx),
            Geometry::Oval(s) => s.draw(ctx),
            Geometry::Line(s) => s.draw(ctx),
            Geometry::Ray(s) => s.draw(ctx),
            Geometry::Segment(s) => s.draw(ctx),
            Geometry::Poly(s) => s.draw(ctx),
            Geometry::Star(s) => s.draw(ctx),
            Geometry::Spiral(s) => s.draw(ctx),
            Geometry::Grid(s) => s.draw(ctx),
            Geometry::Heart(s) => s.draw(ctx),
            Geometry::QuadCurve(s) => s.draw(ctx),
            Geometry::BezierCurve(s) => s.draw(ctx),
            Geometry::Image(s) => s.draw(ctx),
        }
    }
}

macro_rules! geometry_kind {
    ($kind:ident) => {
        impl From<$kind> for Geometry {
            fn from(s: $kind) -> Geometry {
                Geometry::$kind(s)
            }
        }

        impl From<$kind> for crate::shape::Shape {
            fn from(s: $kind) -> crate::shape::Shape {
                crate::shape::Shape::new(Geometry::$kind(s))
            }
        }
    };
}

geometry_kind!(Container);
geometry_kind!(Rect);
geometry_kind!(RoundRect);
geometry_kind!(Circle);
geometry_kind!(Oval);
geometry_kind!(Line);
geometry_kind!(Ray);
geometry_kind!(Segment);
geometry_kind!(Poly);
geometry_kind!(Star);
geometry_kind!(Spiral);
geometry_kind!(Grid);
geometry_kind!(Heart);
geometry_kind!(QuadCurve);
geometry_kind!(BezierCurve);
geometry_kind!(Image);
