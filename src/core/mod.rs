//! The headless editing core: key handling, the document value and the
//! commands that transform it. Nothing here touches the terminal.

pub mod app;
pub mod buffer;
pub mod columns;
pub mod commands;
pub mod dispatcher;
pub mod geometry;
pub mod input;
pub mod keymap;
