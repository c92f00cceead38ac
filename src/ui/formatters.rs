const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count in human-readable form (B, KB, MB and, if allowed, GB)
///
/// The unit index is clamped before dividing, so callers that pass
/// `with_gb = false` always get at most MB, even for very large values.
pub fn format_bytes(bytes: u64, with_gb: bool) -> String {
    let max_index = if with_gb { 3 } else { 2 };
    let index = if bytes == 0 {
        0
    } else {
        (bytes.ilog(1024) as usize).min(max_index)
    };

    if index == 0 {
        return format!("{} {}", bytes, SIZE_UNITS[0]);
    }

    let value = bytes as f64 / 1024f64.powi(index as i32);
    format!("{:.1} {}", round_half_up(value, 1), SIZE_UNITS[index])
}

/// Round to `decimals` places with exact halves going away from zero.
///
/// `format!("{:.N}")` alone breaks ties to even (`1.25` -> `"1.2"`).
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `round_half_up` then print exactly `decimals` places
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals as i32))
}

/// Format a duration in seconds as "1 day, 2 hours, 3 minutes"
///
/// Seconds are only shown for durations under one hour.
pub fn format_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut components = Vec::new();
    if days > 0 {
        components.push(pluralize(days, "day"));
    }
    if days > 0 || hours > 0 {
        components.push(pluralize(hours, "hour"));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        components.push(pluralize(minutes, "minute"));
    }
    if days == 0 && hours == 0 {
        components.push(pluralize(seconds, "second"));
    }

    components.join(", ")
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Format a float with at most `max_decimals` digits, dropping trailing zeros
pub fn format_decimal(value: f64, max_decimals: usize) -> String {
    let formatted = format_fixed(value, max_decimals);
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
