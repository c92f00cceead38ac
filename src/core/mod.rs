// Core business logic module

pub mod config;
pub mod fetch;
pub mod render;
pub mod report;
pub mod system_info;

// Re-export commonly used items
pub use config::{Config, PartKind, PartSpec, SeparatorWidthMode};
pub use fetch::{render_parts, render_parts_sequential};
pub use render::{render, Row, RowValue};
pub use report::assemble;
pub use system_info::{FactsProvider, HostFacts};
