// sysfetch Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SysfetchError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;

// Initialize logging
//
// Defaults to warnings only so diagnostics never interleave with the report;
// RUST_LOG overrides it.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
