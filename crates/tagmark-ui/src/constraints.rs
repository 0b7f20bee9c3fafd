use std::time::Instant;

use tagmark_engine::coords::Vec2;
use tagmark_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Multiplies every inset, e.g. to turn density-independent units into pixels.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self { top: self.top * k, right: self.right * k, bottom: self.bottom * k, left: self.left * k }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. A tight constraint
/// (`min == max`) forces an exact size regardless of content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// No bounds at all.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`], [`Widget::arrange`] and
/// [`Widget::on_event`].
///
/// [`Widget::measure`]: crate::widget::Widget::measure
/// [`Widget::arrange`]: crate::widget::Widget::arrange
/// [`Widget::on_event`]: crate::widget::Widget::on_event
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Frame timestamp. State changes triggered by events start their
    /// animations at this instant.
    pub now: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints { min: Vec2::zero(), max: Vec2::new(50.0, 20.0) };
        assert_eq!(c.constrain(Vec2::new(80.0, 10.0)), Vec2::new(50.0, 10.0));
    }

    #[test]
    fn tight_forces_exact_size() {
        let c = Constraints::tight(Vec2::new(100.0, 40.0));
        assert_eq!(c.constrain(Vec2::new(12.0, 300.0)), Vec2::new(100.0, 40.0));
    }

    #[test]
    fn edges_scale_and_sum() {
        let e = Edges::symmetric(4.0, 12.0).scaled(2.0);
        assert_eq!(e.h(), 48.0);
        assert_eq!(e.v(), 16.0);
    }
}
