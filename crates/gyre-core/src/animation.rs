//! # Frame sequencer
//!
//! Drives the animation clock: duration and frame rate become a sequence
//! of normalized times in `[0, 1)`, one render-list pass per frame.
//!
//! Frames are pure functions of `t` for a fixed scene, so the sequencer
//! may also fan the work out across threads — each worker gets its own
//! forked drawing surface, and frames are collected in order.

use rayon::prelude::*;

use crate::easing::Ease;
use crate::painter::Frame;
use crate::render_list::RenderList;
use crate::styles::Background;

/// An animation: a render list plus the clock that samples it.
#[derive(Debug)]
pub struct Animation {
    pub list: RenderList,
    duration: f64,
    fps: f64,
}

impl Animation {
    /// Wraps a render list with the default clock: 2 seconds at 30 fps.
    pub fn new(list: RenderList) -> Animation {
        Animation { list, duration: 2.0, fps: 30.0 }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Sets the duration in seconds.
    pub fn set_duration(&mut self, seconds: f64) -> &mut Self {
        self.duration = seconds;
        self
    }

    pub fn set_fps(&mut self, fps: f64) -> &mut Self {
        self.fps = fps;
        self
    }

    /// Sets the easing inherited by shapes added after this call.
    pub fn set_ease(&mut self, ease: impl Into<Ease>) -> &mut Self {
        self.list.set_ease(ease);
        self
    }

    /// Sets the loop flag inherited by shapes added after this call.
    pub fn set_looping(&mut self, looping: bool) -> &mut Self {
        self.list.set_looping(looping);
        self
    }

    /// Resizes the drawing surface.
    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.list.resize(width, height);
        self
    }

    /// Shortcut for the background default style.
    pub fn set_bg_color(&mut self, bg: impl Into<Background>) -> &mut Self {
        self.list.defaults.bg_color = bg.into();
        self
    }

    pub fn width(&self) -> u32 {
        self.list.width()
    }

    pub fn height(&self) -> u32 {
        self.list.height()
    }

    /// Number of frames the clock produces: `duration * fps`, at least 1.
    pub fn total_frames(&self) -> usize {
        ((self.duration * self.fps).round() as usize).max(1)
    }

    /// The sample times: `k / total` for `k in 0..total`.
    ///
    /// The first frame is exactly `t = 0` and the upper boundary is
    /// exclusive. Times are computed multiplicatively, so there is no
    /// accumulated float drift to tolerate — the count is exact by
    /// construction.
    pub fn frame_times(&self) -> Vec<f64> {
        let total = self.total_frames();
        (0..total).map(|k| k as f64 / total as f64).collect()
    }

    /// Renders every frame in order through the list's own surface.
    pub fn render_all(&mut self) -> Vec<Frame> {
        self.frame_times().into_iter().map(|t| self.list.render(t)).collect()
    }

    /// Renders every frame across a thread pool.
    ///
    /// Each worker forks an independent surface; the scene itself is
    /// read-only during rendering. Output order matches frame order.
    pub fn render_all_parallel(&self) -> Vec<Frame> {
        self.frame_times()
            .into_par_iter()
            .map_init(
                || self.list.fork_painter(),
                |painter, t| self.list.render_with(painter.as_mut(), t),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_list::RenderList;
    use crate::shapes::Rect;
    use crate::test_painter::RecordingPainter;

    fn animation() -> Animation {
        let (painter, _ops) = RecordingPainter::new(10, 10);
        Animation::new(RenderList::new(10, 10, Box::new(painter)))
    }

    #[test]
    fn two_seconds_at_thirty_fps_is_sixty_frames() {
        let mut anim = animation();
        anim.set_duration(2.0).set_fps(30.0);

        let times = anim.frame_times();
        assert_eq!(times.len(), 60);
        assert_eq!(times[0], 0.0);
        assert!((times[1] - 1.0 / 60.0).abs() < 1e-12);
        // Exclusive upper boundary.
        assert!(*times.last().unwrap() < 1.0);
    }

    #[test]
    fn fractional_products_round_to_a_frame_count() {
        let mut anim = animation();
        anim.set_duration(1.0).set_fps(29.97);
        assert_eq!(anim.total_frames(), 30);

        anim.set_duration(0.0);
        assert_eq!(anim.total_frames(), 1);
        assert_eq!(anim.frame_times(), vec![0.0]);
    }

    #[test]
    fn render_all_produces_one_buffer_per_frame() {
        let mut anim = animation();
        anim.set_duration(0.5).set_fps(10.0);
        anim.list.add(Rect::new(), None);

        let frames = anim.render_all();
        assert_eq!(frames.len(), 5);
        assert!(frames.iter().all(|f| f.width == 10 && f.height == 10));
    }

    #[test]
    fn setters_chain() {
        let mut anim = animation();
        anim.set_duration(1.0).set_fps(12.0).set_looping(false).set_bg_color("transparent");
        assert_eq!(anim.duration(), 1.0);
        assert_eq!(anim.fps(), 12.0);
        assert!(!anim.list.looping());
    }
}
