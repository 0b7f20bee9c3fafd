use std::time::Instant;

use tagmark_engine::coords::Vec2;
use tagmark_engine::paint::Color;
use tagmark_engine::path::Path;
use tagmark_engine::scene::{DrawList, StrokeStyle, ZIndex};
use tagmark_engine::text::{FontId, FontSystem, LineMetrics};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and carries the frame timestamp, so widgets
/// evaluate their animations at one consistent instant per frame. A widget
/// that is mid-animation calls [`request_redraw`](Self::request_redraw);
/// that is the only way paint feeds back into scheduling.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    now: Instant,
    z: i32,
    redraw_requested: bool,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a FontSystem, now: Instant) -> Self {
        Self { draw_list, fonts, now, z: 0, redraw_requested: false }
    }

    // ── frame state ───────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Ask the host for another frame after this one.
    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    #[inline]
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    // ── text measurement ──────────────────────────────────────────────────

    #[inline]
    pub fn measure_text(&self, text: &str, font: Option<FontId>, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }

    #[inline]
    pub fn line_metrics(&self, font: Option<FontId>, size: f32) -> LineMetrics {
        self.fonts.line_metrics(font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Strokes an open polyline. Empty or single-point paths draw nothing.
    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        let z = self.next_z();
        self.draw_list.push_stroke(z, path, style);
    }

    /// Single-line text with its line box's top-left at `origin`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: Option<FontId>,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
