pub(crate) mod stroke;
pub(crate) mod text;

pub use stroke::{StrokeCmd, StrokeStyle};
pub use text::TextCmd;
