use crate::core::system_info::types::MemoryFacts;
use crate::error::Result;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

pub fn collect() -> Result<MemoryFacts> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
    let sys = System::new_with_specifics(refresh);

    // "Active" memory is what applications hold, excluding reclaimable cache
    Ok(MemoryFacts {
        active_bytes: Some(sys.used_memory()),
        total_bytes: Some(sys.total_memory()),
    })
}
