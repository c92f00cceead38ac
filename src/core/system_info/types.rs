use serde::{Deserialize, Serialize};

/// Operating system information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsFacts {
    pub distro: Option<String>,
    pub release: Option<String>,
    pub arch: Option<String>,
}

/// CPU information, including the package temperature when a sensor exposes it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuFacts {
    pub manufacturer: Option<String>,
    pub brand: Option<String>,
    pub physical_cores: Option<usize>,
    pub speed_ghz: Option<f64>,
    pub temperature_celsius: Option<f64>,
}

/// Memory Information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryFacts {
    pub active_bytes: Option<u64>,
    pub total_bytes: Option<u64>,
}

/// A single graphics controller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuController {
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub vram_bytes: Option<u64>,
}

/// A connected display
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayFacts {
    pub resolution_x: Option<u32>,
    pub resolution_y: Option<u32>,
    pub main: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicsFacts {
    pub controllers: Vec<GpuController>,
    pub displays: Vec<DisplayFacts>,
}

/// Battery state (only on laptops)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryFacts {
    pub percent: Option<f64>,
    pub charging: bool,
    pub minutes_remaining: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetInterface {
    pub name: Option<String>,
    pub ip4: Option<String>,
}

/// A logged-in user session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user: Option<String>,
    pub tty: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskKind {
    Hdd,
    Ssd,
    #[default]
    Unknown,
}

impl DiskKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiskKind::Hdd => "HDD",
            DiskKind::Ssd => "SSD",
            DiskKind::Unknown => "???",
        }
    }
}

/// Storage device information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskFacts {
    pub name: Option<String>,
    /// Bus the device hangs off (`NVMe`, `USB`), when it can be told
    pub interface: Option<String>,
    pub kind: DiskKind,
    pub size_bytes: Option<u64>,
}
