//! A painter that records every call, for exercising render order and
//! bracketing without a raster backend.

use std::sync::{Arc, Mutex};

use crate::color::Color;
use crate::painter::{Frame, LineCap, LineJoin, Painter, RasterImage};

pub(crate) type OpLog = Arc<Mutex<Vec<String>>>;

pub(crate) struct RecordingPainter {
    width: u32,
    height: u32,
    ops: OpLog,
}

impl RecordingPainter {
    pub(crate) fn new(width: u32, height: u32) -> (RecordingPainter, OpLog) {
        let ops: OpLog = Arc::new(Mutex::new(Vec::new()));
        (RecordingPainter { width, height, ops: ops.clone() }, ops)
    }

    fn log(&self, op: String) {
        self.ops.lock().unwrap().push(op);
    }
}

impl Painter for RecordingPainter {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.log(format!("resize {width} {height}"));
    }

    fn fork(&self) -> Box<dyn Painter> {
        // Forks share the log; the core tests only fork sequentially.
        Box::new(RecordingPainter {
            width: self.width,
            height: self.height,
            ops: self.ops.clone(),
        })
    }

    fn save(&mut self) {
        self.log("save".into());
    }

    fn restore(&mut self) {
        self.log("restore".into());
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.log(format!("translate {dx} {dy}"));
    }

    fn rotate(&mut self, radians: f64) {
        self.log(format!("rotate {radians}"));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.log(format!("scale {sx} {sy}"));
    }

    fn set_line_width(&mut self, width: f64) {
        self.log(format!("line_width {width}"));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.log(format!("line_cap {cap:?}"));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.log(format!("line_join {join:?}"));
    }

    fn set_miter_limit(&mut self, limit: f64) {
        self.log(format!("miter_limit {limit}"));
    }

    fn set_dash(&mut self, pattern: &[f64], offset: f64) {
        self.log(format!("dash {pattern:?} {offset}"));
    }

    fn begin_path(&mut self) {
        self.log("begin_path".into());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.log(format!("move_to {x} {y}"));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.log(format!("line_to {x} {y}"));
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.log(format!("quad_to {cx} {cy} {x} {y}"));
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.log(format!("cubic_to {c1x} {c1y} {c2x} {c2y} {x} {y}"));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.log(format!("arc {cx} {cy} {radius} {start_angle} {end_angle}"));
    }

    fn close_path(&mut self) {
        self.log("close_path".into());
    }

    fn fill_preserve(&mut self, color: Color) {
        self.log(format!("fill {:?}", color.to_rgba8()));
    }

    fn stroke_preserve(&mut self, color: Color) {
        self.log(format!("stroke {:?}", color.to_rgba8()));
    }

    fn paint(&mut self, color: Color) {
        self.log(format!("paint {:?}", color.to_rgba8()));
    }

    fn clear(&mut self) {
        self.log("clear".into());
    }

    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
    ) {
        self.log(format!(
            "draw_image {}x{} at {x} {y} size {width:?} {height:?}",
            image.width, image.height
        ));
    }

    fn frame(&self) -> Frame {
        Frame::new(
            self.width,
            self.height,
            vec![0; (self.width * self.height * 4) as usize],
        )
    }
}
