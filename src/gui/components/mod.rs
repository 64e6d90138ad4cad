//! GUI components

pub mod source_item;
pub mod url_input;

// Re-export for convenience
pub use source_item::source_item;
pub use url_input::url_input;
