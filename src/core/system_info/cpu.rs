use crate::core::system_info::types::CpuFacts;
use crate::error::{Result, SysfetchError};
use sysinfo::{Components, CpuRefreshKind, RefreshKind, System};

pub fn collect() -> Result<CpuFacts> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_frequency());
    let sys = System::new_with_specifics(refresh);

    let first_cpu = sys
        .cpus()
        .first()
        .ok_or_else(|| SysfetchError::provider("No CPU reported by the system"))?;

    let manufacturer = manufacturer_from_vendor(first_cpu.vendor_id(), first_cpu.brand());
    let brand = clean_brand(first_cpu.brand(), manufacturer.as_deref());

    // sysinfo reports MHz
    let frequency_mhz = first_cpu.frequency();
    let speed_ghz = (frequency_mhz > 0).then(|| frequency_mhz as f64 / 1000.0);

    Ok(CpuFacts {
        manufacturer,
        brand,
        physical_cores: System::physical_core_count(),
        speed_ghz,
        temperature_celsius: package_temperature(),
    })
}

/// Current global CPU usage in percent.
///
/// Usage is computed from the difference between two refreshes, so this
/// blocks for at least `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`.
pub fn current_load() -> Result<Option<f64>> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage());
    let mut sys = System::new_with_specifics(refresh);

    sys.refresh_cpu_usage();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();

    if sys.cpus().is_empty() {
        return Ok(None);
    }

    let usage = sys.global_cpu_usage();
    Ok(usage.is_finite().then_some(usage as f64))
}

/// Hottest CPU-related sensor, if any sensor is exposed
fn package_temperature() -> Option<f64> {
    let components = Components::new_with_refreshed_list();

    components
        .iter()
        .filter(|component| is_cpu_sensor(component.label()))
        .filter_map(|component| component.temperature())
        .filter(|celsius| celsius.is_finite() && *celsius > 0.0)
        .map(f64::from)
        .reduce(f64::max)
}

fn is_cpu_sensor(label: &str) -> bool {
    let label = label.to_lowercase();
    ["cpu", "package", "tctl", "tdie", "coretemp", "k10temp"]
        .iter()
        .any(|needle| label.contains(needle))
}

/// Map a CPUID vendor string to a short manufacturer name
pub fn manufacturer_from_vendor(vendor_id: &str, brand: &str) -> Option<String> {
    let vendor = vendor_id.trim();
    let known = match vendor {
        "GenuineIntel" => Some("Intel"),
        "AuthenticAMD" => Some("AMD"),
        "CentaurHauls" => Some("VIA"),
        "HygonGenuine" => Some("Hygon"),
        _ => None,
    };

    if let Some(name) = known {
        return Some(name.to_string());
    }

    if !vendor.is_empty() {
        return Some(vendor.to_string());
    }

    // Some ARM platforms only expose a brand string
    brand
        .split_whitespace()
        .next()
        .map(|word| word.to_string())
}

/// Strip trademark markers, the manufacturer prefix and the nominal clock
/// from a CPU brand string.
///
/// `"Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz"` becomes `"Core i7-8700K"`.
pub fn clean_brand(brand: &str, manufacturer: Option<&str>) -> Option<String> {
    let mut cleaned = brand.to_string();
    for marker in ["(R)", "(r)", "(TM)", "(tm)", "®", "™"] {
        cleaned = cleaned.replace(marker, "");
    }

    if let Some(at) = cleaned.find(" @ ") {
        cleaned.truncate(at);
    }

    let mut words: Vec<&str> = cleaned.split_whitespace().collect();

    if let (Some(first), Some(manufacturer)) = (words.first(), manufacturer) {
        if first.eq_ignore_ascii_case(manufacturer) {
            words.remove(0);
        }
    }

    while let Some(last) = words.last() {
        if last.eq_ignore_ascii_case("cpu") || last.eq_ignore_ascii_case("processor") {
            words.pop();
        } else {
            break;
        }
    }

    let joined = words.join(" ");
    (!joined.is_empty()).then_some(joined)
}
