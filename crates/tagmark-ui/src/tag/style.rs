use std::time::Duration;

use tagmark_engine::coords::Vec2;
use tagmark_engine::paint::Color;

/// Geometry and timing constants of a checkable tag.
///
/// Lengths are density-independent: multiply by the display density before
/// using them as logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagStyle {
    /// Label size used when the widget does not set one explicitly.
    pub text_size: f32,
    /// Distance from the tag's left edge to the checkmark box.
    pub check_inset: f32,
    /// Size of the box the checkmark is drawn in.
    pub check_size: Vec2,
    /// How far the label slides right when checked.
    pub slide_distance: f32,
    pub stroke_width: f32,
    pub check_color: Color,
    /// Shared by the label slide and the checkmark reveal so both end together.
    pub transition: Duration,
}

impl Default for TagStyle {
    fn default() -> Self {
        Self {
            text_size: 16.0,
            check_inset: 9.0,
            check_size: Vec2::new(12.0, 8.0),
            slide_distance: 8.0,
            stroke_width: 2.0,
            check_color: Color::WHITE,
            transition: Duration::from_millis(100),
        }
    }
}
