//! Application state and phase transitions

pub mod state;

pub use state::{App, Phase};
