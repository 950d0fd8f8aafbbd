//! Scene-level rendering checks against the pixmap backend.

use gyre_core::{
    Animation, Background, Color, Easing, Rect, RenderList, Shape,
};
use gyre_raster::PixmapPainter;

fn list(width: u32, height: u32) -> RenderList {
    RenderList::new(width, height, Box::new(PixmapPainter::new(width, height)))
}

/// A rectangle with fully constant properties.
fn static_rect() -> Shape {
    Shape::from(Rect::new().x(50.0).y(50.0).w(40.0).h(40.0))
        .fill(Color::rgb(1.0, 0.0, 0.0))
        .stroke(false)
}

#[test]
fn static_scene_renders_bit_identical_frames() {
    let mut list = list(100, 100);
    list.add(static_rect(), None);

    let a = list.render(0.0);
    let b = list.render(0.5);
    let c = list.render(0.99);

    // Nothing animates, so every sample time yields the same pixels.
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn filled_rect_lands_where_expected() {
    let mut list = list(100, 100);
    list.add(static_rect(), None);

    let frame = list.render(0.0);
    // Centered 40x40 rect at (50, 50) on the default white background.
    assert_eq!(frame.pixel(50, 50), [255, 0, 0, 255]);
    assert_eq!(frame.pixel(10, 10), [255, 255, 255, 255]);
    assert_eq!(frame.pixel(90, 90), [255, 255, 255, 255]);
}

#[test]
fn transparent_background_clears_to_zero_alpha() {
    let mut list = list(50, 50);
    list.defaults.bg_color = Background::Transparent;
    let frame = list.render(0.0);
    assert_eq!(frame.pixel(25, 25), [0, 0, 0, 0]);
}

#[test]
fn animated_position_moves_between_frames() {
    let mut list = list(100, 100);
    list.set_looping(false);
    list.set_ease(Easing::Linear);
    list.add(
        Shape::from(Rect::new().x([20.0, 80.0]).y(50.0).w(10.0).h(10.0))
            .fill(Color::BLACK)
            .stroke(false),
        None,
    );

    let start = list.render(0.0);
    let end = list.render(0.5);
    assert_ne!(start, end);
    assert_eq!(start.pixel(20, 50), [0, 0, 0, 255]);
    assert_eq!(end.pixel(50, 50), [0, 0, 0, 255]);
}

#[test]
fn parent_transform_carries_into_children() {
    use gyre_core::Container;

    let mut list = list(100, 100);
    let parent = list.add(Container::new().x(30.0).y(30.0), None);
    list.add(
        Shape::from(Rect::new().x(0.0).y(0.0).w(10.0).h(10.0))
            .fill(Color::BLACK)
            .stroke(false),
        Some(parent),
    );

    let frame = list.render(0.0);
    // The child's local origin lands at the container's position.
    assert_eq!(frame.pixel(30, 30), [0, 0, 0, 255]);
}

#[test]
fn later_shapes_paint_over_earlier_ones() {
    let mut list = list(60, 60);
    list.add(
        Shape::from(Rect::new().x(30.0).y(30.0).w(30.0).h(30.0))
            .fill(Color::rgb(1.0, 0.0, 0.0))
            .stroke(false),
        None,
    );
    list.add(
        Shape::from(Rect::new().x(30.0).y(30.0).w(30.0).h(30.0))
            .fill(Color::rgb(0.0, 0.0, 1.0))
            .stroke(false),
        None,
    );

    let frame = list.render(0.0);
    assert_eq!(frame.pixel(30, 30), [0, 0, 255, 255]);
}

#[test]
fn parallel_rendering_matches_sequential() {
    let mut anim = Animation::new(list(64, 64));
    anim.set_duration(0.5).set_fps(12.0).set_ease(Easing::Bounce);
    anim.list.add(
        Shape::from(Rect::new().x([10.0, 50.0]).y(32.0).w(12.0).h(12.0))
            .fill(Color::rgb(0.2, 0.4, 0.9)),
        None,
    );

    let sequential = anim.render_all();
    let parallel = anim.render_all_parallel();
    assert_eq!(sequential.len(), parallel.len());
    for (i, (a, b)) in sequential.iter().zip(parallel.iter()).enumerate() {
        assert_eq!(a, b, "frame {i} differs between sequential and parallel");
    }
}
