use crate::core::system_info::types::{DiskFacts, DiskKind};
use crate::error::Result;
use std::collections::HashSet;
use sysinfo::Disks;

/// Mounted storage devices, one entry per device name
pub fn collect() -> Result<Vec<DiskFacts>> {
    let disks = Disks::new_with_refreshed_list();
    let mut seen = HashSet::new();

    let mut facts: Vec<DiskFacts> = disks
        .iter()
        .filter(|disk| disk.total_space() > 0)
        .filter(|disk| seen.insert(disk.name().to_os_string()))
        .map(|disk| DiskFacts {
            name: Some(disk.name().to_string_lossy().to_string()).filter(|name| !name.is_empty()),
            interface: interface_type(&disk.name().to_string_lossy(), disk.is_removable()),
            kind: match disk.kind() {
                sysinfo::DiskKind::HDD => DiskKind::Hdd,
                sysinfo::DiskKind::SSD => DiskKind::Ssd,
                sysinfo::DiskKind::Unknown(_) => DiskKind::Unknown,
            },
            size_bytes: Some(disk.total_space()),
        })
        .collect();

    facts.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(facts)
}

/// Best-effort bus name. sysinfo does not report the bus, so it is guessed
/// from the device name and the removable flag.
pub fn interface_type(device: &str, removable: bool) -> Option<String> {
    let device = device.to_lowercase();
    if device.contains("nvme") {
        Some("NVMe".to_string())
    } else if device.contains("mmcblk") {
        Some("MMC".to_string())
    } else if removable {
        Some("USB".to_string())
    } else {
        None
    }
}
