//! End-to-end checks through the full stack: engine, pixmap surface,
//! and encoders.

use gyre::{Color, Container, Easing, Gif, ImageSequence, Rect, Shape};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn solid_rect(size: f64, color: Color) -> Shape {
    Shape::from(Rect::new().x(0.0).y(0.0).w(size).h(size))
        .fill(color)
        .stroke(false)
}

#[test]
fn two_seconds_at_thirty_fps_yields_sixty_frames() {
    let mut anim = gyre::animation(32, 32);
    anim.set_duration(2.0).set_fps(30.0);

    let times = anim.frame_times();
    assert_eq!(times.len(), 60);
    assert_eq!(times[0], 0.0);
    assert!((times[1] - 1.0 / 60.0).abs() < 1e-12);

    let frames = anim.render_all();
    assert_eq!(frames.len(), 60);
}

#[test]
fn static_scene_is_time_invariant() {
    let mut anim = gyre::animation(64, 64);
    anim.list.add(
        Shape::from(Rect::new().x(32.0).y(32.0).w(20.0).h(20.0)).fill("rebeccapurple"),
        None,
    );

    let a = anim.list.render(0.0);
    let b = anim.list.render(0.5);
    let c = anim.list.render(0.99);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn paint_order_is_depth_first_insertion_order() {
    init_tracing();

    let red = Color::rgb(1.0, 0.0, 0.0);
    let green = Color::rgb(0.0, 1.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);

    let mut anim = gyre::animation(80, 80);
    // A: red, top-level. C: green, child of A, painted after A but
    // before B. B: blue, top-level, painted last.
    let a = anim.list.add(
        Shape::from(Container::new().x(40.0).y(40.0)),
        None,
    );
    anim.list.add(solid_rect(30.0, red), Some(a));
    anim.list.add(solid_rect(20.0, green), Some(a));
    anim.list.add(
        Shape::from(Rect::new().x(40.0).y(40.0).w(10.0).h(10.0))
            .fill(blue)
            .stroke(false),
        None,
    );

    let frame = anim.list.render(0.0);
    // Innermost: B over everything.
    assert_eq!(frame.pixel(40, 40), [0, 0, 255, 255]);
    // Between B and C edges: green over red.
    assert_eq!(frame.pixel(40, 33), [0, 255, 0, 255]);
    // Outer ring: red only.
    assert_eq!(frame.pixel(40, 28), [255, 0, 0, 255]);
}

#[test]
fn looping_animation_returns_to_its_start() {
    let mut anim = gyre::animation(60, 60);
    anim.set_ease(Easing::Linear).set_looping(true);
    anim.list.add(
        Shape::from(Rect::new().x([10.0, 50.0]).y(30.0).w(8.0).h(8.0))
            .fill(Color::BLACK)
            .stroke(false),
        None,
    );

    // Ping-pong symmetry: t and 1-t land on the same local time, so the
    // frames match bit for bit. The apex of the cycle is the far point.
    let rising = anim.list.render(0.25);
    let falling = anim.list.render(0.75);
    let apex = anim.list.render(0.5);

    assert_eq!(rising, falling);
    assert_ne!(rising, apex);
    assert_eq!(apex.pixel(50, 30), [0, 0, 0, 255]);
}

#[test]
fn gif_export_writes_a_playable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pulse.gif");

    let mut anim = gyre::animation(24, 24);
    anim.set_duration(0.5).set_fps(10.0);
    anim.list.add(
        Shape::from(Rect::new().x(12.0).y(12.0).w([4.0, 16.0]).h([4.0, 16.0]))
            .fill("teal"),
        None,
    );

    let written = Gif::new(&path).save(&mut anim).unwrap();
    let bytes = std::fs::read(written).unwrap();
    assert_eq!(&bytes[..6], b"GIF89a");
}

#[test]
fn image_sequence_export_numbers_every_frame() {
    let dir = tempfile::tempdir().unwrap();

    let mut anim = gyre::animation(16, 16);
    anim.set_duration(0.3).set_fps(10.0);
    anim.list.add(Shape::from(Rect::new()), None);

    let written = ImageSequence::new(dir.path().join("seq.png"))
        .save(&mut anim)
        .unwrap();
    assert_eq!(written.len(), 3);
    assert!(written.iter().all(|p| p.exists()));
}
