// UI and formatting module

pub mod color;
pub mod formatters;
pub mod table;

// Re-export commonly used items for cleaner imports
pub use color::Painter;
pub use formatters::{format_bytes, format_decimal, format_duration, format_fixed};
pub use table::{Cell, Table};
