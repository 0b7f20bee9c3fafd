//! Font loading and text metrics.
//!
//! Only measurement lives here: the label widget needs advance widths for
//! layout and ascent/descent for vertical centering. Rasterisation belongs to
//! whichever renderer consumes the draw list.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, LineMetrics};
