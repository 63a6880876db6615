//! Pure text renderers used by `Display`

pub mod line;
pub mod selection;

pub use selection::{RenderSpan, RowHighlight, ScreenSelection};
