use std::time::Instant;

use tagmark_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Capabilities ──────────────────────────────────────────────────────────

/// Something that paints itself into `bounds` once per frame.
pub trait Renderable {
    fn render(&self, painter: &mut Painter, bounds: Rect);
}

/// Receives the rectangle assigned by layout whenever it changes.
pub trait BoundsAware {
    fn on_bounds_changed(&mut self, bounds: Rect);
}

/// An on/off value owned by the host.
///
/// `now` is the instant the change happens at, so implementors can start
/// time-driven transitions without reading a clock themselves.
pub trait Checkable {
    fn is_checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool, now: Instant);

    fn toggle(&mut self, now: Instant) {
        let next = !self.is_checked();
        self.set_checked(next, now);
    }
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// Host-side contract every UI component implements.
///
/// Per frame the scene calls `measure`, then `arrange` with the final rect,
/// then routes input through `on_event`, then `paint`s.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: the parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Accept the rect chosen by the parent. Called every frame; widgets
    /// that cache geometry compare against the previous value themselves.
    fn arrange(&mut self, _rect: Rect, _ctx: &LayoutCtx) {}

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget. Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        self.0.arrange(rect, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
