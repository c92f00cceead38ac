use crate::core::system_info::types::OsFacts;
use crate::error::Result;
use sysinfo::System;

pub fn collect() -> Result<OsFacts> {
    Ok(OsFacts {
        distro: System::name().filter(|name| !name.trim().is_empty()),
        release: System::os_version().filter(|version| !version.trim().is_empty()),
        arch: Some(std::env::consts::ARCH.to_string()),
    })
}
