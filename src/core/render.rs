//! Part renderer: turns one configured part plus host facts into at most one row.
//!
//! Every handler returns `Result<Option<Row>>`. `Ok(None)` means the fact is
//! missing or fails its validity check; `Err` is a provider fault. Both end
//! up as "no row" so a single broken sensor never blemishes the report.

use crate::core::config::{
    BatteryOptions, CpuOptions, DisplayOptions, GpuOptions, MemoryOptions, NetOptions, OsOptions,
    PartKind, PartSpec,
};
use crate::core::system_info::{FactsProvider, NetInterface};
use crate::error::Result;
use crate::ui::formatters::{format_bytes, format_decimal, format_duration, format_fixed};
use log::{debug, warn};
use std::fmt;
use std::net::Ipv4Addr;

/// Value column of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    Text(String),
    Count(u64),
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Text(text) => f.write_str(text),
            RowValue::Count(count) => write!(f, "{}", count),
        }
    }
}

/// One rendered part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Placeholder for a rule line; its width is decided at assembly time
    Separator,
    Entry { label: String, value: RowValue },
}

impl Row {
    pub fn entry<L: Into<String>>(label: L, value: RowValue) -> Self {
        Row::Entry {
            label: label.into(),
            value,
        }
    }

    pub fn text<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        Self::entry(label, RowValue::Text(value.into()))
    }
}

/// Render a single part. Never fails: faults are logged and skipped.
pub fn render(part: &PartSpec, facts: &dyn FactsProvider) -> Option<Row> {
    if !part.enabled {
        return None;
    }

    match render_kind(&part.kind, facts) {
        Ok(Some(row)) => Some(row),
        Ok(None) => {
            debug!("Part '{}' skipped: no valid data", part.kind.name());
            None
        }
        Err(e) => {
            warn!("Part '{}' skipped: {}", part.kind.name(), e);
            None
        }
    }
}

fn render_kind(kind: &PartKind, facts: &dyn FactsProvider) -> Result<Option<Row>> {
    let value = match kind {
        PartKind::Separator => return Ok(Some(Row::Separator)),
        PartKind::Os(options) => os_value(facts, options)?,
        PartKind::Cpu(options) => cpu_value(facts, options)?,
        PartKind::Uptime => uptime_value(facts)?,
        PartKind::Gpu(options) => gpu_value(facts, options)?,
        PartKind::Memory(options) => memory_value(facts, options)?,
        PartKind::Display(options) => display_value(facts, options)?,
        PartKind::Proc => facts.processes()?.map(RowValue::Count),
        PartKind::Battery(options) => battery_value(facts, options)?,
        PartKind::Ping => ping_value(facts)?,
        PartKind::PublicIp => non_empty(facts.public_ip()?),
        PartKind::Net(options) => net_value(facts, options)?,
        PartKind::Shell => non_empty(facts.shell()?),
        PartKind::Users => users_value(facts)?,
        PartKind::CpuLoad => cpu_load_value(facts)?,
        PartKind::Storage => storage_value(facts)?,
    };

    Ok(value
        .zip(kind.label())
        .map(|(value, label)| Row::entry(label, value)))
}

fn non_empty(value: Option<String>) -> Option<RowValue> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(RowValue::Text)
}

/// Some and not negative (NaN counts as absent)
fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v >= 0.0)
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn os_value(facts: &dyn FactsProvider, options: &OsOptions) -> Result<Option<RowValue>> {
    let os = facts.os()?;
    let Some(distro) = present(&os.distro) else {
        return Ok(None);
    };

    let mut value = distro.to_string();
    if let Some(release) = present(&os.release).filter(|_| options.show_version) {
        value.push_str(&format!(", {}", release));
    }
    if let Some(arch) = present(&os.arch).filter(|_| options.show_arch) {
        value.push_str(&format!(" ({})", arch));
    }

    Ok(Some(RowValue::Text(value)))
}

fn cpu_value(facts: &dyn FactsProvider, options: &CpuOptions) -> Result<Option<RowValue>> {
    let cpu = facts.cpu()?;
    let (Some(manufacturer), Some(brand)) = (present(&cpu.manufacturer), present(&cpu.brand))
    else {
        return Ok(None);
    };

    let mut value = format!("{} {}", manufacturer, brand);
    if let Some(cores) = cpu.physical_cores.filter(|c| options.show_cores && *c > 0) {
        value.push_str(&format!(" ({})", cores));
    }
    if let Some(speed) = positive(cpu.speed_ghz).filter(|_| options.show_speed) {
        value.push_str(&format!(" @ {}GHz", format_decimal(speed, 2)));
    }
    if let Some(temp) = positive(cpu.temperature_celsius).filter(|_| options.show_temp) {
        value.push_str(&format!(" ({} °C)", format_decimal(temp, 1)));
    }

    Ok(Some(RowValue::Text(value)))
}

fn uptime_value(facts: &dyn FactsProvider) -> Result<Option<RowValue>> {
    Ok(facts
        .uptime()?
        .map(|seconds| RowValue::Text(format_duration(seconds))))
}

fn gpu_value(facts: &dyn FactsProvider, options: &GpuOptions) -> Result<Option<RowValue>> {
    let graphics = facts.graphics()?;

    let controllers: Vec<String> = graphics
        .controllers
        .iter()
        .filter_map(|controller| {
            let model = present(&controller.model)?;
            match controller.vram_bytes.filter(|v| options.show_vram && *v > 0) {
                Some(vram) => Some(format!("{} ({})", model, format_bytes(vram, true))),
                None => Some(model.to_string()),
            }
        })
        .collect();

    if controllers.is_empty() {
        return Ok(None);
    }
    Ok(Some(RowValue::Text(controllers.join(", "))))
}

fn memory_value(facts: &dyn FactsProvider, options: &MemoryOptions) -> Result<Option<RowValue>> {
    let memory = facts.memory()?;
    let (Some(active), Some(total)) = (
        memory.active_bytes.filter(|b| *b > 0),
        memory.total_bytes.filter(|b| *b > 0),
    ) else {
        return Ok(None);
    };

    let mut value = format!("{} / {}", format_bytes(active, false), format_bytes(total, false));
    if options.show_percent {
        let percent = active as f64 / total as f64 * 100.0;
        value.push_str(&format!(" ({} %)", format_decimal(percent, 2)));
    }

    Ok(Some(RowValue::Text(value)))
}

fn display_value(facts: &dyn FactsProvider, options: &DisplayOptions) -> Result<Option<RowValue>> {
    let graphics = facts.graphics()?;

    let resolutions: Vec<String> = graphics
        .displays
        .iter()
        .filter(|display| !options.main_display_only || display.main)
        .filter_map(|display| match (display.resolution_x, display.resolution_y) {
            (Some(x), Some(y)) => Some(format!("{}x{}", x, y)),
            _ => None,
        })
        .collect();

    if resolutions.is_empty() {
        return Ok(None);
    }
    Ok(Some(RowValue::Text(resolutions.join(", "))))
}

fn battery_value(facts: &dyn FactsProvider, options: &BatteryOptions) -> Result<Option<RowValue>> {
    let Some(battery) = facts.battery()? else {
        return Ok(None);
    };
    let Some(percent) = non_negative(battery.percent) else {
        return Ok(None);
    };

    let mut value = format!("{}%", format_fixed(percent, 0));
    if options.show_time_remaining {
        if battery.charging {
            value.push_str(" (charging)");
        } else if let Some(minutes) = non_negative(battery.minutes_remaining) {
            let seconds = (minutes * 60.0).round() as u64;
            value.push_str(&format!(" ({})", format_duration(seconds)));
        }
    }

    Ok(Some(RowValue::Text(value)))
}

fn ping_value(facts: &dyn FactsProvider) -> Result<Option<RowValue>> {
    Ok(non_negative(facts.inet_latency()?)
        .map(|ms| RowValue::Text(format!("{}ms", format_fixed(ms, 0)))))
}

fn net_value(facts: &dyn FactsProvider, options: &NetOptions) -> Result<Option<RowValue>> {
    let interfaces = facts.network_interfaces()?;

    let addresses: Vec<String> = interfaces
        .iter()
        .filter(|iface| !options.exclude_loopback || !is_loopback(iface))
        .filter_map(|iface| {
            let ip = present(&iface.ip4)?;
            let name = present(&iface.name)?;
            Some(format!("{} ({})", ip, name))
        })
        .collect();

    if addresses.is_empty() {
        return Ok(None);
    }
    Ok(Some(RowValue::Text(addresses.join(", "))))
}

/// Loopback by address (127.0.0.0/8) or by the conventional interface names
pub fn is_loopback(iface: &NetInterface) -> bool {
    let by_address = iface
        .ip4
        .as_deref()
        .and_then(|ip| ip.trim().parse::<Ipv4Addr>().ok())
        .is_some_and(|ip| ip.is_loopback());
    let by_name = matches!(iface.name.as_deref(), Some("lo") | Some("lo0"));

    by_address || by_name
}

fn users_value(facts: &dyn FactsProvider) -> Result<Option<RowValue>> {
    let sessions = facts.users()?;

    let mut names: Vec<&str> = Vec::new();
    for user in sessions.iter().filter_map(|session| present(&session.user)) {
        if !names.contains(&user) {
            names.push(user);
        }
    }

    if names.is_empty() {
        return Ok(None);
    }
    Ok(Some(RowValue::Text(names.join(", "))))
}

fn cpu_load_value(facts: &dyn FactsProvider) -> Result<Option<RowValue>> {
    Ok(non_negative(facts.current_load()?)
        .map(|load| RowValue::Text(format!("{}%", format_fixed(load, 2)))))
}

fn storage_value(facts: &dyn FactsProvider) -> Result<Option<RowValue>> {
    let disks = facts.disk_layout()?;

    let entries: Vec<String> = disks
        .iter()
        .map(|disk| {
            let mut entry = match present(&disk.interface) {
                Some(interface) => format!("{} {}", interface, disk.kind.label()),
                None => disk.kind.label().to_string(),
            };
            if let Some(size) = disk.size_bytes.filter(|s| *s > 0) {
                entry.push_str(&format!(" {}", format_bytes(size, true)));
            }
            if let Some(name) = present(&disk.name) {
                entry.push_str(&format!(" ({})", name));
            }
            entry
        })
        .collect();

    if entries.is_empty() {
        return Ok(None);
    }
    Ok(Some(RowValue::Text(entries.join(", "))))
}
