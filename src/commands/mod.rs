// Command handlers module
pub mod fetch;
pub mod version;

// Re-exports for cleaner imports
pub use fetch::execute as fetch;
pub use version::execute as version;
