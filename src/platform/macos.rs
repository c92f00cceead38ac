//! Graphics facts from `system_profiler SPDisplaysDataType -json`.

#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

use crate::core::system_info::types::{DisplayFacts, GpuController, GraphicsFacts};
use crate::error::Result;
use serde_json::Value;

pub fn parse_displays_json(json: &str) -> Result<GraphicsFacts> {
    let root: Value = serde_json::from_str(json)?;
    let entries = root
        .get("SPDisplaysDataType")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut facts = GraphicsFacts::default();

    for entry in &entries {
        let model = entry
            .get("sppci_model")
            .and_then(Value::as_str)
            .map(|s| s.to_string());
        let vram_bytes = ["spdisplays_vram", "spdisplays_vram_shared"]
            .iter()
            .find_map(|key| entry.get(*key).and_then(Value::as_str))
            .and_then(parse_vram);

        facts.controllers.push(GpuController {
            vendor: entry
                .get("spdisplays_vendor")
                .and_then(Value::as_str)
                .map(|s| s.trim_start_matches("sppci_vendor_").to_string()),
            model,
            vram_bytes,
        });

        let screens = entry
            .get("spdisplays_ndrvs")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for screen in screens {
            let pixels = screen
                .get("_spdisplays_pixels")
                .or_else(|| screen.get("_spdisplays_resolution"))
                .and_then(Value::as_str)
                .and_then(parse_resolution);

            facts.displays.push(DisplayFacts {
                resolution_x: pixels.map(|(x, _)| x),
                resolution_y: pixels.map(|(_, y)| y),
                main: screen.get("spdisplays_main").and_then(Value::as_str) == Some("spdisplays_yes"),
            });
        }
    }

    Ok(facts)
}

/// `"1536 MB"` or `"8 GB"` -> bytes
fn parse_vram(text: &str) -> Option<u64> {
    let mut parts = text.split_whitespace();
    let amount: u64 = parts.next()?.parse().ok()?;
    let multiplier: u64 = match parts.next()?.to_ascii_uppercase().as_str() {
        "MB" => 1024 * 1024,
        "GB" => 1024 * 1024 * 1024,
        _ => return None,
    };
    amount.checked_mul(multiplier)
}

/// `"2880 x 1800"` or `"1440 x 900 @ 60.00Hz"` -> `(2880, 1800)`
fn parse_resolution(text: &str) -> Option<(u32, u32)> {
    let mut numbers = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty());
    let x = numbers.next()?.parse().ok()?;
    let y = numbers.next()?.parse().ok()?;
    Some((x, y))
}
