//! Checkable tag: a label with an animated checkmark.
//!
//! Layers, bottom-up:
//! - [`PathRevealAnimator`] reveals the fixed [`CheckPath`] by length over time
//! - [`TagTransitionController`] keeps the checked flag and drives the label
//!   slide and the reveal together, superseding runs on re-toggle
//! - [`CheckableTag`] adapts the controller to the widget host: input,
//!   drawable state, color resolution, measurement and painting

mod colors;
mod controller;
mod reveal;
mod style;
mod view;

pub use colors::{ColorResolver, ColorStateList, DrawableState, StateSelector};
pub use controller::{TagPhase, TagState, TagTransitionController};
pub use reveal::{CheckPath, PathRevealAnimator};
pub use style::TagStyle;
pub use view::CheckableTag;
