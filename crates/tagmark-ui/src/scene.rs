use std::time::Instant;

use tagmark_engine::coords::{Rect, Vec2};
use tagmark_engine::scene::DrawList;
use tagmark_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when a press is released over the same widget.
    pub mouse_clicked: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Each [`frame`](Self::frame) runs measure → arrange → events → paint
/// against a persistent root and leaves the result in `draw_list`.
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent frame.
    pub draw_list: DrawList,
    was_pressed: bool,
    needs_redraw: bool,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            draw_list: DrawList::new(),
            was_pressed: false,
            needs_redraw: true,
        }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// `true` when the last painted frame asked for a follow-up frame.
    ///
    /// Hosts that only render on demand should keep scheduling frames while
    /// this is set. It starts `true` so the very first frame always happens.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Lay out, route input to, and paint `root` for the frame sampled at `now`.
    ///
    /// The root always occupies the full viewport.
    pub fn frame(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        input: &UiInput,
        now: Instant,
    ) -> &mut DrawList {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── measure + arrange ─────────────────────────────────────────────
        {
            let ctx = LayoutCtx { fonts: &self.font_system, now };
            let _ = root.measure(Constraints::tight(viewport), &ctx);
            root.arrange(rect, &ctx);
        }

        // ── events ────────────────────────────────────────────────────────
        {
            let ctx = LayoutCtx { fonts: &self.font_system, now };
            let pos = input.mouse_pos;
            if input.mouse_pressed && !self.was_pressed {
                let _ = root.on_event(&UiEvent::Press { pos }, rect, &ctx);
            }
            if !input.mouse_pressed && self.was_pressed {
                let _ = root.on_event(&UiEvent::Release { pos }, rect, &ctx);
            }
            if input.mouse_clicked {
                let _ = root.on_event(&UiEvent::Click { pos }, rect, &ctx);
            }
            self.was_pressed = input.mouse_pressed;
        }
        // ── paint ─────────────────────────────────────────────────────────
        let mut painter = Painter::new(&mut self.draw_list, &self.font_system, now);
        root.paint(&mut painter, rect);
        self.needs_redraw = painter.redraw_requested();

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
