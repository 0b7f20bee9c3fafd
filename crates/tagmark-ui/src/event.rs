use tagmark_engine::coords::Vec2;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button went down at `pos`.
    Press { pos: Vec2 },
    /// Primary button went up at `pos`. Delivered even when `pos` is outside
    /// the widget that saw the press.
    Release { pos: Vec2 },
    /// Primary button pressed and released at `pos`.
    Click { pos: Vec2 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, stop routing.
    Consumed,
    /// Event was not handled, keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
