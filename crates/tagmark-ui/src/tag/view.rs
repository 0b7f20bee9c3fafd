use std::time::Instant;

use tagmark_engine::coords::{Rect, Vec2};
use tagmark_engine::paint::Color;
use tagmark_engine::scene::StrokeStyle;
use tagmark_engine::text::FontId;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{BoundsAware, Checkable, Renderable, Widget};

use super::colors::{ColorResolver, DrawableState};
use super::controller::TagTransitionController;
use super::style::TagStyle;

/// A label that toggles on click, sliding its text aside and drawing an
/// animated checkmark when checked.
///
/// The widget is a host adapter: it owns the interaction state and text
/// styling, and forwards the checked flag and layout bounds to a
/// [`TagTransitionController`] that produces the animated render values.
///
/// # Example
/// ```rust,ignore
/// CheckableTag::new("Rust")
///     .density(2.0)
///     .font(body_font)
///     .text_colors(
///         ColorStateList::new(Color::from_rgb_hex(0x555555))
///             .with(StateSelector::any().checked(true), Color::WHITE),
///     )
///     .on_change(|v| log::info!("tag: {v}"))
/// ```
pub struct CheckableTag {
    label: String,
    font: Option<FontId>,
    text_size: Option<f32>,
    text_colors: Box<dyn ColorResolver>,
    text_color: Color,
    padding: Edges,
    min_size: Vec2,
    density: f32,
    style: TagStyle,
    state: DrawableState,
    controller: TagTransitionController,
    bounds: Option<Rect>,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl CheckableTag {
    pub fn new(label: impl Into<String>) -> Self {
        let style = TagStyle::default();
        Self {
            label: label.into(),
            font: None,
            text_size: None,
            text_colors: Box::new(Color::BLACK),
            text_color: Color::BLACK,
            padding: Edges::default(),
            min_size: Vec2::zero(),
            density: 1.0,
            style,
            state: DrawableState::default(),
            controller: TagTransitionController::new(false, 1.0, style),
            bounds: None,
            on_change: None,
        }
    }

    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }
    /// Label size in logical pixels; defaults to the style's size × density.
    pub fn text_size(mut self, v: f32) -> Self { self.text_size = Some(v); self }
    /// Padding in logical pixels.
    pub fn padding(mut self, v: Edges) -> Self { self.padding = v; self }
    /// Minimum size, e.g. the intrinsic size of a background drawn behind the tag.
    pub fn min_size(mut self, v: Vec2) -> Self { self.min_size = v; self }

    pub fn text_colors(mut self, v: impl ColorResolver + 'static) -> Self {
        self.text_colors = Box::new(v);
        self.text_color = self.text_colors.resolve(self.state);
        self
    }

    pub fn density(mut self, v: f32) -> Self {
        self.density = v;
        self.rebuild_controller();
        self
    }

    pub fn style(mut self, v: TagStyle) -> Self {
        self.style = v;
        self.rebuild_controller();
        self
    }

    /// Initial checked state; shown settled, without a transition.
    pub fn checked(mut self, v: bool) -> Self {
        self.state.checked = v;
        self.text_color = self.text_colors.resolve(self.state);
        self.rebuild_controller();
        self
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn rebuild_controller(&mut self) {
        self.controller = TagTransitionController::new(self.state.checked, self.density, self.style);
        if let Some(bounds) = self.bounds {
            self.controller.set_bounds(bounds);
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label. Takes effect on the next painted frame.
    pub fn set_label(&mut self, text: impl Into<String>) {
        self.label = text.into();
    }

    #[inline]
    pub fn controller(&self) -> &TagTransitionController {
        &self.controller
    }

    #[inline]
    pub fn drawable_state(&self) -> DrawableState {
        self.state
    }

    /// Label color resolved for the current drawable state.
    #[inline]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if self.state.enabled != enabled {
            self.state.enabled = enabled;
            self.drawable_state_changed(now);
        }
    }

    fn effective_text_size(&self) -> f32 {
        self.text_size.unwrap_or(self.style.text_size * self.density)
    }

    /// Re-resolves the label color and forwards the checked flag to the
    /// controller. Called after any [`DrawableState`] change.
    pub fn drawable_state_changed(&mut self, now: Instant) {
        self.text_color = self.text_colors.resolve(self.state);
        let checked = self.is_checked();
        if self.controller.set_checked(checked, now) {
            log::debug!("tag {:?} checked={checked}", self.label);
        }
    }

    fn set_pressed(&mut self, pressed: bool, now: Instant) {
        if self.state.pressed != pressed {
            self.state.pressed = pressed;
            self.drawable_state_changed(now);
        }
    }
}

// ── capabilities ──────────────────────────────────────────────────────────

impl Checkable for CheckableTag {
    fn is_checked(&self) -> bool {
        self.state.checked
    }

    fn set_checked(&mut self, checked: bool, now: Instant) {
        if self.state.checked == checked {
            return;
        }
        self.state.checked = checked;
        self.drawable_state_changed(now);
        if let Some(f) = &mut self.on_change {
            f(checked);
        }
    }
}

impl BoundsAware for CheckableTag {
    fn on_bounds_changed(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.controller.set_bounds(bounds);
    }
}

impl Renderable for CheckableTag {
    fn render(&self, painter: &mut Painter, bounds: Rect) {
        let now = painter.now();

        if self.controller.should_draw_checkmark() {
            let style = StrokeStyle::new(self.style.stroke_width * self.density, self.style.check_color);
            painter.stroke_path(self.controller.current_reveal_sub_path(now), style);
        }

        if !self.label.is_empty() {
            let size = self.effective_text_size();
            let width = painter.measure_text(&self.label, self.font, size).x;
            let metrics = painter.line_metrics(self.font, size);
            let baseline = metrics.centered_baseline(bounds.center().y);
            let origin = Vec2::new(
                self.controller.current_text_offset(now) - width * 0.5,
                baseline - metrics.ascent,
            );
            painter.text(self.label.as_str(), self.font, size, self.text_color, origin);
        }

        if self.controller.is_animating(now) {
            painter.request_redraw();
        }
    }
}

// ── widget ────────────────────────────────────────────────────────────────

impl Widget for CheckableTag {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let text = ctx.fonts.measure_text(&self.label, self.font, self.effective_text_size());
        let size = Vec2::new(
            (text.x + self.padding.h()).max(self.min_size.x),
            (text.y + self.padding.v()).max(self.min_size.y),
        );
        constraints.constrain(size)
    }

    fn arrange(&mut self, rect: Rect, _ctx: &LayoutCtx) {
        if self.bounds != Some(rect) {
            self.on_bounds_changed(rect);
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.render(painter, rect);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::Press { pos } if rect.contains(*pos) => {
                self.set_pressed(true, ctx.now);
                EventResult::Consumed
            }
            UiEvent::Release { .. } if self.state.pressed => {
                self.set_pressed(false, ctx.now);
                EventResult::Consumed
            }
            UiEvent::Click { pos } if rect.contains(*pos) && self.state.enabled => {
                self.toggle(ctx.now);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
