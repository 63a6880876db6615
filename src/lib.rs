pub mod config;
pub mod core;
pub mod error;
pub mod run;
pub mod terminal;
pub mod user_config;

pub use error::EditorError;
