use crate::core::system_info::types::{GpuController, GraphicsFacts};
use crate::error::Result;
use crate::platform::{list_nvidia_devices, NvidiaDevice};
use log::debug;

#[cfg(target_os = "macos")]
use crate::platform::{commands, macos};

pub fn collect() -> Result<GraphicsFacts> {
    #[cfg(target_os = "macos")]
    {
        // One system_profiler call reports both controllers and screens
        let json = commands::run("system_profiler", &["SPDisplaysDataType", "-json"])?;
        macos::parse_displays_json(&json)
    }

    #[cfg(not(target_os = "macos"))]
    {
        let controllers = collect_controllers();
        let displays = super::display::collect().unwrap_or_else(|e| {
            debug!("Display detection unavailable: {}", e);
            vec![]
        });

        Ok(GraphicsFacts {
            controllers,
            displays,
        })
    }
}

#[cfg_attr(target_os = "macos", allow(dead_code))]
fn collect_controllers() -> Vec<GpuController> {
    let controllers = match crate::platform::commands::run("lspci", &["-mm"]) {
        Ok(output) => crate::platform::commands::parse_lspci_controllers(&output),
        Err(e) => {
            debug!("lspci unavailable: {}", e);
            vec![]
        }
    };

    match list_nvidia_devices() {
        Ok(devices) => merge_nvidia_devices(controllers, &devices),
        Err(e) => {
            debug!("NVML unavailable: {}", e);
            controllers
        }
    }
}

/// Fill VRAM for NVIDIA controllers from NVML devices, matched in bus order.
///
/// When the PCI listing found nothing (e.g. no `lspci` on Windows), the NVML
/// devices become the controller list.
pub fn merge_nvidia_devices(
    controllers: Vec<GpuController>,
    devices: &[NvidiaDevice],
) -> Vec<GpuController> {
    if controllers.is_empty() {
        return devices
            .iter()
            .map(|device| GpuController {
                vendor: Some("NVIDIA".to_string()),
                model: device.name.clone(),
                vram_bytes: device.vram_bytes,
            })
            .collect();
    }

    let mut remaining = devices.iter();
    controllers
        .into_iter()
        .map(|mut controller| {
            let is_nvidia = controller
                .vendor
                .as_deref()
                .is_some_and(|vendor| vendor.to_uppercase().contains("NVIDIA"));

            if is_nvidia && controller.vram_bytes.is_none() {
                if let Some(device) = remaining.next() {
                    controller.vram_bytes = device.vram_bytes;
                }
            }
            controller
        })
        .collect()
}
