//! Tagmark UI: widget shell and the animated checkable tag, on top of
//! `tagmark-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tagmark_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//! let mut root: Element = CheckableTag::new("Rust")
//!     .font(font)
//!     .density(2.0)
//!     .on_change(|v| log::info!("checked: {v}"))
//!     .into();
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_pressed, mouse_clicked };
//! let draw_list = scene.frame(&mut root, viewport, &input, Instant::now());
//! // Hand draw_list to a renderer; schedule another frame while
//! // scene.needs_redraw() is true.
//! ```

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod tag;
pub mod widget;

/// Common imports for building and hosting tags.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::tag::{
        CheckableTag, ColorResolver, ColorStateList, DrawableState, StateSelector, TagStyle,
    };
    pub use crate::widget::{BoundsAware, Checkable, Element, Renderable, Widget};

    pub use tagmark_engine::coords::{Rect, Vec2};
    pub use tagmark_engine::paint::Color;
    pub use tagmark_engine::scene::StrokeStyle;
    pub use tagmark_engine::text::FontId;
}
