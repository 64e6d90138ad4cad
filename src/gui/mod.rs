//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod launcher;
pub mod state;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::{AppFlags, Message, TikloaderApp};
pub use state::{Screen, ScreenState};
