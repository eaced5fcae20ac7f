//! Terminal UI components using ratatui

mod flags;
mod terminal;
mod ui;

pub use terminal::Tui;
pub use ui::render;
