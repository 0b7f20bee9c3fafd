//! Coordinate and geometry types shared by the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (density-scaled by the widget that produces them)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
