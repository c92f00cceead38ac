use crate::core::system_info::types::NetInterface;
use crate::error::Result;
use std::net::IpAddr;
use sysinfo::Networks;

/// Network interfaces with their first IPv4 address, sorted by name
pub fn collect() -> Result<Vec<NetInterface>> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<NetInterface> = networks
        .iter()
        .map(|(name, data)| NetInterface {
            name: Some(name.to_string()),
            ip4: data.ip_networks().iter().find_map(|network| match network.addr {
                IpAddr::V4(addr) => Some(addr.to_string()),
                IpAddr::V6(_) => None,
            }),
        })
        .collect();

    // Networks is backed by a hash map; keep the report stable between runs
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(interfaces)
}
