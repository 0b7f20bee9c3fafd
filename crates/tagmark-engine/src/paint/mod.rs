//! Paint model shared between UI and renderers.
//!
//! Only solid colors exist: the checkmark stroke and the label are both
//! single-color primitives.

mod color;

pub use color::Color;
