use crate::error::Result;

#[cfg(feature = "nvml")]
use once_cell::sync::Lazy;
#[cfg(feature = "nvml")]
use nvml_wrapper::Nvml;

/// Singleton - NVML must be initialized ONCE only
///
/// NVML (NVIDIA Management Library) is the library used by nvidia-smi. It
/// reports device names and framebuffer size without spawning processes.
#[cfg(feature = "nvml")]
static NVML: Lazy<Option<Nvml>> = Lazy::new(|| Nvml::init().ok());

/// An NVIDIA device as reported by NVML
#[derive(Debug, Clone, PartialEq)]
pub struct NvidiaDevice {
    pub name: Option<String>,
    pub vram_bytes: Option<u64>,
}

/// List NVIDIA devices in NVML index order
#[cfg(feature = "nvml")]
pub fn list_devices() -> Result<Vec<NvidiaDevice>> {
    let nvml = NVML.as_ref().ok_or_else(|| {
        crate::error::SysfetchError::unsupported(
            "NVML not available (NVIDIA driver not installed or incompatible)",
        )
    })?;

    let count = nvml.device_count().map_err(|e| {
        crate::error::SysfetchError::provider(format!("Failed to count NVIDIA devices: {}", e))
    })?;

    let devices = (0..count)
        .filter_map(|index| nvml.device_by_index(index).ok())
        .map(|device| NvidiaDevice {
            name: device.name().ok(),
            vram_bytes: device.memory_info().ok().map(|memory| memory.total),
        })
        .collect();

    Ok(devices)
}

#[cfg(not(feature = "nvml"))]
pub fn list_devices() -> Result<Vec<NvidiaDevice>> {
    Err(crate::error::SysfetchError::unsupported(
        "NVML support not compiled in (enable the 'nvml' feature)",
    ))
}
