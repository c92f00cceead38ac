pub mod battery;
pub mod collector;
pub mod cpu;
pub mod display;
pub mod gpu;
pub mod internet;
pub mod memory;
pub mod network;
pub mod os;
pub mod session;
pub mod storage;
pub mod types;

pub use collector::HostFacts;
pub use types::*;

use crate::error::Result;

/// Source of host facts consumed by the part renderer.
///
/// Every query is independent and read-only, so implementations must be
/// shareable across the blocking tasks that render parts concurrently.
/// Absent values are `None` or empty collections; `Err` means the query
/// itself failed.
pub trait FactsProvider: Send + Sync {
    fn hostname(&self) -> Result<Option<String>>;

    fn os(&self) -> Result<OsFacts>;

    /// CPU identity, clock and package temperature
    fn cpu(&self) -> Result<CpuFacts>;

    /// Seconds since boot
    fn uptime(&self) -> Result<Option<u64>>;

    fn memory(&self) -> Result<MemoryFacts>;

    /// Graphics controllers and connected displays
    fn graphics(&self) -> Result<GraphicsFacts>;

    /// Total number of running processes
    fn processes(&self) -> Result<Option<u64>>;

    fn battery(&self) -> Result<Option<BatteryFacts>>;

    /// Round-trip latency to a well-known internet host, in milliseconds
    fn inet_latency(&self) -> Result<Option<f64>>;

    fn public_ip(&self) -> Result<Option<String>>;

    fn network_interfaces(&self) -> Result<Vec<NetInterface>>;

    fn shell(&self) -> Result<Option<String>>;

    fn users(&self) -> Result<Vec<UserSession>>;

    /// Current CPU load across all cores, in percent
    fn current_load(&self) -> Result<Option<f64>>;

    fn disk_layout(&self) -> Result<Vec<DiskFacts>>;
}
