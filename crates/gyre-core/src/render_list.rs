//! # Render list
//!
//! The ordered collection of shapes making up one scene, stored as an
//! arena addressed by [`ShapeId`]. Insertion order is paint order at
//! every nesting level — later shapes paint over earlier ones, and a
//! parent always paints before its children.
//!
//! The list owns the drawing surface. `render` holds the list mutably
//! for the whole frame, which is what makes "never resize mid-render" a
//! compile-time property rather than a runtime check.

use std::sync::Arc;

use crate::easing::{Ease, Easing};
use crate::painter::{Frame, Painter};
use crate::shape::Shape;
use crate::styles::{Background, DefaultStyles};

/// Arena handle for a shape owned by a render list.
pub type ShapeId = usize;

/// A callback bracketing the shape pass, for vignettes and watermarks.
/// Receives the painter (state saved around the call) and the frame time.
pub type RenderHook = Arc<dyn Fn(&mut dyn Painter, f64) + Send + Sync>;

pub struct RenderList {
    width: u32,
    height: u32,
    /// The fallback style table every shape consults.
    pub defaults: DefaultStyles,
    ease: Ease,
    looping: bool,
    nodes: Vec<Shape>,
    roots: Vec<ShapeId>,
    painter: Box<dyn Painter>,
    before_render: Option<RenderHook>,
    after_render: Option<RenderHook>,
}

impl RenderList {
    /// Creates a render list owning `painter`, resized to the given
    /// dimensions. The default easing is sine and looping is on.
    pub fn new(width: u32, height: u32, mut painter: Box<dyn Painter>) -> RenderList {
        painter.resize(width, height);
        RenderList {
            width,
            height,
            defaults: DefaultStyles::default(),
            ease: Ease::Named(Easing::Sine),
            looping: true,
            nodes: Vec::new(),
            roots: Vec::new(),
            painter,
            before_render: None,
            after_render: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ease(&self) -> &Ease {
        &self.ease
    }

    /// Sets the easing inherited by shapes added *after* this call.
    pub fn set_ease(&mut self, ease: impl Into<Ease>) -> &mut Self {
        self.ease = ease.into();
        self
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Sets the loop flag inherited by shapes added *after* this call.
    pub fn set_looping(&mut self, looping: bool) -> &mut Self {
        self.looping = looping;
        self
    }

    pub fn set_before_render(&mut self, hook: RenderHook) -> &mut Self {
        self.before_render = Some(hook);
        self
    }

    pub fn set_after_render(&mut self, hook: RenderHook) -> &mut Self {
        self.after_render = Some(hook);
        self
    }

    /// Adds a shape, optionally under an existing parent.
    ///
    /// Unset ease/loop values are inherited from the list here, so every
    /// reachable shape has concrete values before its first render.
    /// A child renders inside its parent's transform scope, after the
    /// parent's own draw call.
    ///
    /// # Panics
    ///
    /// Panics when `parent` is not a handle previously returned by this
    /// list.
    pub fn add(&mut self, shape: impl Into<Shape>, parent: Option<ShapeId>) -> ShapeId {
        let mut shape = shape.into();

        if shape.ease.is_none() {
            shape.ease = Some(self.ease.clone());
        }
        if shape.looping.is_none() {
            shape.looping = Some(self.looping);
        }

        let id = self.nodes.len();
        self.nodes.push(shape);

        match parent {
            Some(pid) => {
                assert!(pid < id, "parent shape id {pid} does not exist in this render list");
                self.nodes[pid].children.push(id);
            }
            None => self.roots.push(id),
        }

        id
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.nodes.get(id)
    }

    /// Mutable access for explicit property changes between render
    /// passes. The shape tree is read-only during a render.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.nodes.get_mut(id)
    }

    /// Top-level shapes in paint order.
    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    /// Discards the drawing surface and recreates it at the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.painter.resize(width, height);
    }

    /// Renders one frame at time `t` into the owned surface.
    pub fn render(&mut self, t: f64) -> Frame {
        let RenderList {
            nodes,
            roots,
            defaults,
            painter,
            before_render,
            after_render,
            ..
        } = self;
        paint_scene(
            nodes,
            roots,
            defaults,
            before_render.as_ref(),
            after_render.as_ref(),
            painter.as_mut(),
            t,
        )
    }

    /// Renders one frame at time `t` into a caller-supplied painter.
    ///
    /// The scene is read-only here; parallel frame rendering gives every
    /// worker its own forked painter and calls this.
    pub fn render_with(&self, painter: &mut dyn Painter, t: f64) -> Frame {
        paint_scene(
            &self.nodes,
            &self.roots,
            &self.defaults,
            self.before_render.as_ref(),
            self.after_render.as_ref(),
            painter,
            t,
        )
    }

    /// An independent painter with this list's dimensions.
    pub fn fork_painter(&self) -> Box<dyn Painter> {
        self.painter.fork()
    }
}

impl std::fmt::Debug for RenderList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderList")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("shapes", &self.nodes.len())
            .field("roots", &self.roots)
            .finish()
    }
}

fn paint_scene(
    nodes: &[Shape],
    roots: &[ShapeId],
    defaults: &DefaultStyles,
    before: Option<&RenderHook>,
    after: Option<&RenderHook>,
    painter: &mut dyn Painter,
    t: f64,
) -> Frame {
    match defaults.bg_color {
        Background::Transparent => painter.clear(),
        Background::Solid(color) => painter.paint(color),
    }

    if let Some(hook) = before {
        painter.save();
        hook(painter, t);
        painter.restore();
    }

    for &id in roots {
        render_shape(nodes, defaults, painter, id, t);
    }

    if let Some(hook) = after {
        painter.save();
        hook(painter, t);
        painter.restore();
    }

    painter.frame()
}

/// Depth-first render: the shape's own pipeline and draw, then its
/// children with the *original* frame time, inside the saved transform
/// scope.
fn render_shape(
    nodes: &[Shape],
    defaults: &DefaultStyles,
    painter: &mut dyn Painter,
    id: ShapeId,
    time: f64,
) {
    let shape = &nodes[id];
    let t = shape.local_time(time);

    shape.start_draw(painter, defaults, t);
    shape.draw(painter, defaults, t);
    for &child in shape.children() {
        render_shape(nodes, defaults, painter, child, time);
    }
    shape.end_draw(painter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::shapes::{Container, Rect};
    use crate::test_painter::RecordingPainter;

    fn recorded_translations(ops: &[String]) -> Vec<(f64, f64)> {
        ops.iter()
            .filter_map(|op| {
                let rest = op.strip_prefix("translate ")?;
                let mut parts = rest.split(' ');
                let x: f64 = parts.next()?.parse().ok()?;
                let y: f64 = parts.next()?.parse().ok()?;
                Some((x, y))
            })
            .collect()
    }

    #[test]
    fn insertion_assigns_inherited_ease_and_loop() {
        let (painter, _ops) = RecordingPainter::new(10, 10);
        let mut list = RenderList::new(10, 10, Box::new(painter));
        list.set_ease(Easing::Bounce).set_looping(false);

        let id = list.add(Rect::new(), None);
        let shape = list.shape(id).unwrap();
        assert!(shape.ease.is_some());
        assert_eq!(shape.looping, Some(false));

        // An explicit value wins over inheritance.
        let id = list.add(Shape::from(Rect::new()).looping(true), None);
        assert_eq!(list.shape(id).unwrap().looping, Some(true));
    }

    #[test]
    fn paint_order_is_parent_child_then_siblings() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let (painter, ops) = RecordingPainter::new(10, 10);
        let mut list = RenderList::new(10, 10, Box::new(painter));
        list.set_looping(false);
        list.set_ease(Easing::Linear);

        // A (top-level), B (top-level, after A), C (child of A, after A).
        let a = list.add(Container::new().x(1.0).y(0.0), None);
        let _b = list.add(Container::new().x(2.0).y(0.0), None);
        let _c = list.add(Container::new().x(3.0).y(0.0), Some(a));

        list.render(0.0);

        let translations: Vec<(f64, f64)> = recorded_translations(&ops.lock().unwrap())
            .into_iter()
            .filter(|&(x, _)| x == 1.0 || x == 2.0 || x == 3.0)
            .collect();
        // Expected paint order: A, C, B.
        assert_eq!(translations, vec![(1.0, 0.0), (3.0, 0.0), (2.0, 0.0)]);
    }

    #[test]
    fn children_render_inside_parent_scope() {
        let (painter, ops) = RecordingPainter::new(10, 10);
        let mut list = RenderList::new(10, 10, Box::new(painter));

        let parent = list.add(Container::new(), None);
        list.add(Rect::new(), Some(parent));
        list.render(0.0);

        let ops = ops.lock().unwrap();
        let saves = ops.iter().filter(|op| *op == "save").count();
        let restores = ops.iter().filter(|op| *op == "restore").count();
        assert_eq!(saves, restores);

        // The child's save happens before the parent's restore.
        let save_positions: Vec<usize> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| *op == "save")
            .map(|(i, _)| i)
            .collect();
        let restore_positions: Vec<usize> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| *op == "restore")
            .map(|(i, _)| i)
            .collect();
        assert!(save_positions[1] < restore_positions[restore_positions.len() - 1]);
    }

    #[test]
    fn hooks_bracket_the_shape_pass() {
        let (painter, ops) = RecordingPainter::new(10, 10);
        let mut list = RenderList::new(10, 10, Box::new(painter));
        list.set_before_render(Arc::new(|p, _t| p.move_to(111.0, 0.0)));
        list.set_after_render(Arc::new(|p, _t| p.move_to(222.0, 0.0)));
        list.add(Rect::new().x(5.0), None);

        list.render(0.5);

        let ops = ops.lock().unwrap();
        let idx = |needle: &str| ops.iter().position(|op| op.starts_with(needle)).unwrap();
        assert!(idx("move_to 111") < idx("translate 5"));
        assert!(idx("translate 5") < idx("move_to 222"));
    }

    #[test]
    fn background_paints_or_clears() {
        let (painter, ops) = RecordingPainter::new(4, 4);
        let mut list = RenderList::new(4, 4, Box::new(painter));

        list.render(0.0);
        assert!(ops.lock().unwrap().iter().any(|op| op.starts_with("paint")));

        list.defaults.bg_color = Background::Transparent;
        ops.lock().unwrap().clear();
        list.render(0.0);
        assert!(ops.lock().unwrap().iter().any(|op| op == "clear"));
    }

    #[test]
    fn resize_recreates_the_surface() {
        let (painter, ops) = RecordingPainter::new(4, 4);
        let mut list = RenderList::new(4, 4, Box::new(painter));
        list.resize(8, 6);
        assert_eq!(list.width(), 8);
        assert_eq!(list.height(), 6);
        assert!(ops.lock().unwrap().iter().any(|op| op == "resize 8 6"));
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn bogus_parent_handle_panics() {
        let (painter, _ops) = RecordingPainter::new(4, 4);
        let mut list = RenderList::new(4, 4, Box::new(painter));
        list.add(Rect::new(), Some(7));
    }
}
