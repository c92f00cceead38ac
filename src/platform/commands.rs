//! Helpers around platform command-line tools (`lspci`, `xrandr`, `who`).
//!
//! Running the tool is kept apart from parsing its output so the parsers can
//! be tested on any platform.

use crate::core::system_info::types::{DisplayFacts, GpuController, UserSession};
use crate::error::{Result, SysfetchError};
use std::process::Command;

/// Run a tool found on `PATH` and return its stdout
pub fn run(program: &str, args: &[&str]) -> Result<String> {
    let path = which::which(program)
        .map_err(|_| SysfetchError::unsupported(format!("'{}' not found in PATH", program)))?;

    let output = Command::new(path).args(args).output()?;
    if !output.status.success() {
        return Err(SysfetchError::provider(format!(
            "'{}' exited with {}",
            program, output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `lspci -mm` output into graphics controllers.
///
/// Lines look like:
/// `01:00.0 "VGA compatible controller" "NVIDIA Corporation" "GA104 [GeForce RTX 3070]" -ra1 "Gigabyte" "Device 4041"`
pub fn parse_lspci_controllers(output: &str) -> Vec<GpuController> {
    output
        .lines()
        .filter_map(|line| {
            let fields = quoted_fields(line);
            let class = fields.first()?;
            if !is_display_class(class) {
                return None;
            }

            let vendor = fields.get(1).map(|v| v.to_string());
            let model = fields.get(2).map(|device| bracketed_name(device));

            Some(GpuController {
                vendor,
                model,
                vram_bytes: None,
            })
        })
        .collect()
}

fn is_display_class(class: &str) -> bool {
    class.contains("VGA") || class.contains("3D") || class.contains("Display")
}

/// `"GA104 [GeForce RTX 3070]"` -> `"GeForce RTX 3070"`
fn bracketed_name(device: &str) -> String {
    match (device.find('['), device.rfind(']')) {
        (Some(start), Some(end)) if end > start + 1 => device[start + 1..end].trim().to_string(),
        _ => device.trim().to_string(),
    }
}

fn quoted_fields(line: &str) -> Vec<&str> {
    line.split('"')
        .skip(1)
        .step_by(2)
        .collect()
}

/// Parse `xrandr --current` output into active displays.
///
/// Only connected outputs with a current mode (`WxH+X+Y`) are returned.
pub fn parse_xrandr_displays(output: &str) -> Vec<DisplayFacts> {
    output
        .lines()
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.get(1) != Some(&"connected") {
                return None;
            }

            let geometry = tokens.iter().find_map(|token| parse_geometry(token))?;

            Some(DisplayFacts {
                resolution_x: Some(geometry.0),
                resolution_y: Some(geometry.1),
                main: tokens.contains(&"primary"),
            })
        })
        .collect()
}

/// `"1920x1080+0+0"` -> `(1920, 1080)`
fn parse_geometry(token: &str) -> Option<(u32, u32)> {
    let size = token.split('+').next()?;
    if !token.contains('+') {
        return None;
    }
    let (width, height) = size.split_once('x')?;
    Some((width.parse().ok()?, height.parse().ok()?))
}

/// Parse `who` output: the first column is the user, the second the terminal
pub fn parse_who_sessions(output: &str) -> Vec<UserSession> {
    output
        .lines()
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let user = columns.next()?;
            Some(UserSession {
                user: Some(user.to_string()),
                tty: columns.next().map(|tty| tty.to_string()),
            })
        })
        .collect()
}
