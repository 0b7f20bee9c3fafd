//! Per-frame draw stream.
//!
//! Widgets record strokes and text into a [`DrawList`]; a renderer (or a
//! test) replays it in paint order. Each shape keeps its payload type and
//! push helper in its own file under `shapes`.

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use shapes::{StrokeCmd, StrokeStyle, TextCmd};
pub use z_index::ZIndex;
