//! Renderer-facing view models and a plain-text renderer.

pub mod game_screen;
pub mod grid;
pub mod hints;
pub mod status_line;
