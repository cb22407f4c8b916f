//! Theme system for assistant-tui
//!
//! Two fixed palettes, one per color mode. The active mode is owned by a
//! [`Theme`] value that lives in the application state and is handed to the
//! draw functions by reference.

pub mod models;
pub mod parser;


pub use models::{ColorMode, Palette, Role, Theme, ThemeError};
