// Platform-specific code module

pub mod commands;
pub mod macos;
pub mod nvidia_nvml;

// Re-exports for cleaner imports
pub use nvidia_nvml::{list_devices as list_nvidia_devices, NvidiaDevice};
