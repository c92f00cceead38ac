use crate::core::system_info::types::*;
use crate::core::system_info::{
    battery, cpu, gpu, internet, memory, network, os, session, storage, FactsProvider,
};
use crate::error::Result;
use std::net::SocketAddr;
use std::time::Duration;

/// Facts provider backed by the running host
#[derive(Debug, Clone)]
pub struct HostFacts {
    public_ip_url: String,
    latency_target: SocketAddr,
    http_timeout: Duration,
    connect_timeout: Duration,
}

impl HostFacts {
    pub fn new() -> Self {
        Self {
            public_ip_url: internet::PUBLIC_IP_URL.to_string(),
            latency_target: internet::LATENCY_TARGET,
            http_timeout: internet::HTTP_TIMEOUT,
            connect_timeout: internet::CONNECT_TIMEOUT,
        }
    }

    pub fn with_public_ip_url<S: Into<String>>(mut self, url: S) -> Self {
        self.public_ip_url = url.into();
        self
    }

    pub fn with_latency_target(mut self, target: SocketAddr) -> Self {
        self.latency_target = target;
        self
    }
}

impl Default for HostFacts {
    fn default() -> Self {
        Self::new()
    }
}

impl FactsProvider for HostFacts {
    fn hostname(&self) -> Result<Option<String>> {
        Ok(session::hostname())
    }

    fn os(&self) -> Result<OsFacts> {
        os::collect()
    }

    fn cpu(&self) -> Result<CpuFacts> {
        cpu::collect()
    }

    fn uptime(&self) -> Result<Option<u64>> {
        Ok(session::uptime())
    }

    fn memory(&self) -> Result<MemoryFacts> {
        memory::collect()
    }

    fn graphics(&self) -> Result<GraphicsFacts> {
        gpu::collect()
    }

    fn processes(&self) -> Result<Option<u64>> {
        session::process_count()
    }

    fn battery(&self) -> Result<Option<BatteryFacts>> {
        battery::collect()
    }

    fn inet_latency(&self) -> Result<Option<f64>> {
        internet::latency(self.latency_target, self.connect_timeout)
    }

    fn public_ip(&self) -> Result<Option<String>> {
        internet::public_ip(&self.public_ip_url, self.http_timeout)
    }

    fn network_interfaces(&self) -> Result<Vec<NetInterface>> {
        network::collect()
    }

    fn shell(&self) -> Result<Option<String>> {
        Ok(session::shell())
    }

    fn users(&self) -> Result<Vec<UserSession>> {
        session::users()
    }

    fn current_load(&self) -> Result<Option<f64>> {
        cpu::current_load()
    }

    fn disk_layout(&self) -> Result<Vec<DiskFacts>> {
        storage::collect()
    }
}
