//! Terminal front end: input decoding, the cell grid and its output

pub mod color;
pub mod display;
pub mod events;
pub mod raw;
pub mod render;
pub mod renderers;
pub mod viewport;
