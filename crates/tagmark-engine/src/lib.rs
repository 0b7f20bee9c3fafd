//! Tagmark engine crate.
//!
//! Renderer-agnostic building blocks shared by the UI layer: geometry,
//! colors, polyline paths, time-driven animation runs and the draw stream.

pub mod anim;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod scene;
pub mod text;
pub mod time;
