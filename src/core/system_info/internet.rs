use crate::error::{Result, SysfetchError};
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::{Duration, Instant};

/// Plain-text IPv4 echo service
pub const PUBLIC_IP_URL: &str = "https://api.ipify.org";

/// Google public DNS, reachable over TCP on port 53
pub const LATENCY_TARGET: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53);

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Public IPv4 address as seen by an external echo service
pub fn public_ip(url: &str, timeout: Duration) -> Result<Option<String>> {
    let response = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("sysfetch/", env!("CARGO_PKG_VERSION")))
        .build()?
        .get(url)
        .send()?;

    if !response.status().is_success() {
        return Err(SysfetchError::provider(format!(
            "Public IP service returned status {}",
            response.status()
        )));
    }

    let body = response.text()?;
    Ok(parse_ipv4(&body))
}

fn parse_ipv4(body: &str) -> Option<String> {
    body.trim()
        .parse::<Ipv4Addr>()
        .ok()
        .map(|addr| addr.to_string())
}

/// Round-trip time of a TCP handshake with `target`, in milliseconds
pub fn latency(target: SocketAddr, timeout: Duration) -> Result<Option<f64>> {
    let started = Instant::now();
    let stream = TcpStream::connect_timeout(&target, timeout)?;
    let elapsed = started.elapsed();
    drop(stream);

    Ok(Some(elapsed.as_secs_f64() * 1000.0))
}
