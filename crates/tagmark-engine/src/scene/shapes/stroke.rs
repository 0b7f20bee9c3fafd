use crate::paint::Color;
use crate::path::Path;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Fixed-width solid stroke applied along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl StrokeStyle {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Open polyline stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub style: StrokeStyle,
}

impl DrawList {
    /// Records a path stroke. Paths with fewer than two vertices are skipped.
    pub fn push_stroke(&mut self, z: ZIndex, path: Path, style: StrokeStyle) {
        if path.len() < 2 {
            return;
        }
        self.push(z, DrawCmd::Stroke(StrokeCmd { path, style }));
    }
}
