use crate::error::{Result, SysfetchError};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound for separator rules in `fitContentCapped` mode
pub const CAPPED_SEPARATOR_WIDTH: usize = 50;

/// How wide separator rules are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeparatorWidthMode {
    /// The glyph repeated `separatorRepeatCount` times
    #[default]
    Fixed,
    /// As wide as the widest line of the report
    FitContent,
    /// As wide as the widest line, but never wider than 50 columns
    FitContentCapped,
}

/// Color codes: `#rrggbb` hex or a named terminal color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub title: String,
    pub separator: String,
    pub suffix: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#5fafff".to_string(),
            secondary: "#d0d0d0".to_string(),
            title: "#ffaf00".to_string(),
            separator: "#767676".to_string(),
            suffix: "#767676".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OsOptions {
    #[serde(alias = "version")]
    pub show_version: bool,
    #[serde(alias = "arch")]
    pub show_arch: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CpuOptions {
    #[serde(alias = "cores")]
    pub show_cores: bool,
    #[serde(alias = "speed")]
    pub show_speed: bool,
    #[serde(alias = "temp")]
    pub show_temp: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GpuOptions {
    #[serde(alias = "vram")]
    pub show_vram: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryOptions {
    #[serde(alias = "percent")]
    pub show_percent: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    #[serde(alias = "mainOnly")]
    pub main_display_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatteryOptions {
    #[serde(alias = "timeRemaining")]
    pub show_time_remaining: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetOptions {
    #[serde(alias = "noLocal")]
    pub exclude_loopback: bool,
}

/// The metric a part renders, with its display options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum PartKind {
    #[serde(alias = "seperator")]
    Separator,
    Os(OsOptions),
    Cpu(CpuOptions),
    Uptime,
    Gpu(GpuOptions),
    Memory(MemoryOptions),
    Display(DisplayOptions),
    Proc,
    Battery(BatteryOptions),
    Ping,
    PublicIp,
    Net(NetOptions),
    Shell,
    Users,
    CpuLoad,
    Storage,
}

impl PartKind {
    /// Config name of the part, as written in the `name` field
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::Separator => "separator",
            PartKind::Os(_) => "os",
            PartKind::Cpu(_) => "cpu",
            PartKind::Uptime => "uptime",
            PartKind::Gpu(_) => "gpu",
            PartKind::Memory(_) => "memory",
            PartKind::Display(_) => "display",
            PartKind::Proc => "proc",
            PartKind::Battery(_) => "battery",
            PartKind::Ping => "ping",
            PartKind::PublicIp => "publicIp",
            PartKind::Net(_) => "net",
            PartKind::Shell => "shell",
            PartKind::Users => "users",
            PartKind::CpuLoad => "cpuLoad",
            PartKind::Storage => "storage",
        }
    }

    /// Row label; separators have none
    pub fn label(&self) -> Option<&'static str> {
        let label = match self {
            PartKind::Separator => return None,
            PartKind::Os(_) => "OS",
            PartKind::Cpu(_) => "CPU",
            PartKind::Uptime => "Uptime",
            PartKind::Gpu(_) => "GPU",
            PartKind::Memory(_) => "Memory",
            PartKind::Display(_) => "Display",
            PartKind::Proc => "Processes",
            PartKind::Battery(_) => "Battery",
            PartKind::Ping => "Ping",
            PartKind::PublicIp => "Public IP",
            PartKind::Net(_) => "Net",
            PartKind::Shell => "Shell",
            PartKind::Users => "Online",
            PartKind::CpuLoad => "CPU Load",
            PartKind::Storage => "Storage",
        };
        Some(label)
    }
}

fn default_true() -> bool {
    true
}

/// One configured line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSpec {
    #[serde(flatten)]
    pub kind: PartKind,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl PartSpec {
    pub fn new(kind: PartKind) -> Self {
        Self {
            kind,
            enabled: true,
        }
    }

    pub fn disabled(kind: PartKind) -> Self {
        Self {
            kind,
            enabled: false,
        }
    }
}

/// Settings exactly as written in the config file.
///
/// Older config files used flat `*Color` keys and the `seperator` spelling;
/// both are still accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSettings {
    #[serde(alias = "title")]
    pub title_enabled: bool,
    pub colors: Colors,
    pub suffix: String,
    #[serde(alias = "seperator")]
    pub separator_glyph: String,
    #[serde(alias = "seperatorLength", alias = "separatorLength")]
    pub separator_repeat_count: usize,
    pub separator_width_mode: SeparatorWidthMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(alias = "seperatorColor", skip_serializing_if = "Option::is_none")]
    pub separator_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_color: Option<String>,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            title_enabled: true,
            colors: Colors::default(),
            suffix: ":".to_string(),
            separator_glyph: "-".to_string(),
            separator_repeat_count: 30,
            separator_width_mode: SeparatorWidthMode::Fixed,
            primary_color: None,
            secondary_color: None,
            title_color: None,
            separator_color: None,
            suffix_color: None,
        }
    }
}

/// Config file contents before validation.
///
/// Parts stay as raw JSON so one bad entry can be skipped without rejecting
/// the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub settings: RawSettings,
    pub parts: Vec<Value>,
}

impl Default for RawConfig {
    fn default() -> Self {
        let parts = default_parts()
            .iter()
            .filter_map(|part| serde_json::to_value(part).ok())
            .collect();

        Self {
            settings: RawSettings::default(),
            parts,
        }
    }
}

/// The parts shown when no config file exists
pub fn default_parts() -> Vec<PartSpec> {
    vec![
        PartSpec::new(PartKind::Os(OsOptions {
            show_version: true,
            show_arch: true,
        })),
        PartSpec::new(PartKind::Cpu(CpuOptions {
            show_cores: true,
            show_speed: true,
            show_temp: true,
        })),
        PartSpec::new(PartKind::Gpu(GpuOptions { show_vram: true })),
        PartSpec::new(PartKind::Memory(MemoryOptions { show_percent: true })),
        PartSpec::new(PartKind::Storage),
        PartSpec::new(PartKind::Display(DisplayOptions::default())),
        PartSpec::new(PartKind::Separator),
        PartSpec::new(PartKind::Uptime),
        PartSpec::new(PartKind::Proc),
        PartSpec::new(PartKind::CpuLoad),
        PartSpec::new(PartKind::Battery(BatteryOptions {
            show_time_remaining: true,
        })),
        PartSpec::new(PartKind::Shell),
        PartSpec::new(PartKind::Users),
        PartSpec::new(PartKind::Separator),
        PartSpec::new(PartKind::Net(NetOptions {
            exclude_loopback: true,
        })),
        PartSpec::disabled(PartKind::PublicIp),
        PartSpec::disabled(PartKind::Ping),
    ]
}

/// Resolved, immutable settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub title_enabled: bool,
    pub colors: Colors,
    pub suffix: String,
    pub separator_glyph: String,
    /// `separator_glyph` repeated `separatorRepeatCount` times
    pub separator: String,
    pub separator_width_mode: SeparatorWidthMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings: Settings,
    /// Render order
    pub parts: Vec<PartSpec>,
}

impl Config {
    /// Build the immutable config from raw file contents.
    ///
    /// Parts that fail to parse are skipped with a warning.
    pub fn from_raw(raw: RawConfig) -> Self {
        let RawConfig { settings, parts } = raw;

        let mut colors = settings.colors;
        let overrides = [
            (settings.primary_color, &mut colors.primary),
            (settings.secondary_color, &mut colors.secondary),
            (settings.title_color, &mut colors.title),
            (settings.separator_color, &mut colors.separator),
            (settings.suffix_color, &mut colors.suffix),
        ];
        for (legacy, slot) in overrides {
            if let Some(code) = legacy {
                *slot = code;
            }
        }

        let separator = settings
            .separator_glyph
            .repeat(settings.separator_repeat_count);

        let parts = parts
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<PartSpec>(value) {
                Ok(part) => Some(part),
                Err(e) => {
                    warn!("Skipping part #{} in config: {}", index + 1, e);
                    None
                }
            })
            .collect();

        Self {
            settings: Settings {
                title_enabled: settings.title_enabled,
                colors,
                suffix: settings.suffix,
                separator_glyph: settings.separator_glyph,
                separator,
                separator_width_mode: settings.separator_width_mode,
            },
            parts,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)
            .map_err(|e| SysfetchError::config(format!("Invalid config JSON: {}", e)))?;
        Ok(Self::from_raw(raw))
    }

    /// Load a config file; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            SysfetchError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_json_str(&data)
    }

    /// Load `path` if given, otherwise the default config file if it exists,
    /// otherwise the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => Self::load(&default_path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/sysfetch/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sysfetch").join("config.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}
