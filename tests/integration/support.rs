use std::collections::{HashMap, HashSet};
use std::time::Duration;

use sysfetch::core::config::*;
use sysfetch::core::system_info::*;
use sysfetch::error::{Result, SysfetchError};

/// Scripted facts provider: fixed answers, optional failures and delays
#[derive(Debug, Clone, Default)]
pub struct FakeFacts {
    pub hostname: Option<String>,
    pub os: OsFacts,
    pub cpu: CpuFacts,
    pub uptime: Option<u64>,
    pub memory: MemoryFacts,
    pub graphics: GraphicsFacts,
    pub processes: Option<u64>,
    pub battery: Option<BatteryFacts>,
    pub latency: Option<f64>,
    pub public_ip: Option<String>,
    pub interfaces: Vec<NetInterface>,
    pub shell: Option<String>,
    pub users: Vec<UserSession>,
    pub load: Option<f64>,
    pub disks: Vec<DiskFacts>,
    failing: HashSet<&'static str>,
    delays: HashMap<&'static str, Duration>,
}

pub const ALL_QUERIES: [&str; 15] = [
    "hostname", "os", "cpu", "uptime", "memory", "graphics", "processes", "battery", "latency",
    "public_ip", "interfaces", "shell", "users", "load", "disks",
];

impl FakeFacts {
    /// A laptop with every fact available
    pub fn sample() -> Self {
        Self {
            hostname: Some("devbox".to_string()),
            os: OsFacts {
                distro: Some("Ubuntu".to_string()),
                release: Some("22.04".to_string()),
                arch: Some("x86_64".to_string()),
            },
            cpu: CpuFacts {
                manufacturer: Some("Intel".to_string()),
                brand: Some("Core i7-8700K".to_string()),
                physical_cores: Some(6),
                speed_ghz: Some(3.7),
                temperature_celsius: Some(45.5),
            },
            uptime: Some(90_000),
            memory: MemoryFacts {
                active_bytes: Some(4 * 1024 * 1024 * 1024),
                total_bytes: Some(16 * 1024 * 1024 * 1024),
            },
            graphics: GraphicsFacts {
                controllers: vec![GpuController {
                    vendor: Some("NVIDIA Corporation".to_string()),
                    model: Some("GeForce GTX 1080".to_string()),
                    vram_bytes: Some(8 * 1024 * 1024 * 1024),
                }],
                displays: vec![
                    DisplayFacts {
                        resolution_x: Some(1920),
                        resolution_y: Some(1080),
                        main: true,
                    },
                    DisplayFacts {
                        resolution_x: Some(2560),
                        resolution_y: Some(1440),
                        main: false,
                    },
                ],
            },
            processes: Some(312),
            battery: Some(BatteryFacts {
                percent: Some(87.0),
                charging: false,
                minutes_remaining: Some(90.0),
            }),
            latency: Some(23.6),
            public_ip: Some("203.0.113.7".to_string()),
            interfaces: vec![
                NetInterface {
                    name: Some("eth0".to_string()),
                    ip4: Some("10.0.0.5".to_string()),
                },
                NetInterface {
                    name: Some("lo0".to_string()),
                    ip4: Some("127.0.0.1".to_string()),
                },
            ],
            shell: Some("zsh".to_string()),
            users: vec![
                session("alice", "tty1"),
                session("alice", "pts/0"),
                session("bob", "pts/1"),
            ],
            load: Some(12.3),
            disks: vec![DiskFacts {
                name: Some("nvme0n1".to_string()),
                interface: None,
                kind: DiskKind::Ssd,
                size_bytes: Some(512_110_190_592),
            }],
            failing: HashSet::new(),
            delays: HashMap::new(),
        }
    }

    /// Make `query` return a provider error
    pub fn failing(mut self, query: &'static str) -> Self {
        self.failing.insert(query);
        self
    }

    pub fn failing_everything(mut self) -> Self {
        self.failing.extend(ALL_QUERIES);
        self
    }

    /// Make `query` block for `delay` before answering
    pub fn delayed(mut self, query: &'static str, delay: Duration) -> Self {
        self.delays.insert(query, delay);
        self
    }

    fn query<T: Clone>(&self, name: &'static str, value: &T) -> Result<T> {
        if let Some(delay) = self.delays.get(name) {
            std::thread::sleep(*delay);
        }
        if self.failing.contains(name) {
            return Err(SysfetchError::provider(format!("{} sensor unavailable", name)));
        }
        Ok(value.clone())
    }
}

fn session(user: &str, tty: &str) -> UserSession {
    UserSession {
        user: Some(user.to_string()),
        tty: Some(tty.to_string()),
    }
}

impl FactsProvider for FakeFacts {
    fn hostname(&self) -> Result<Option<String>> {
        self.query("hostname", &self.hostname)
    }

    fn os(&self) -> Result<OsFacts> {
        self.query("os", &self.os)
    }

    fn cpu(&self) -> Result<CpuFacts> {
        self.query("cpu", &self.cpu)
    }

    fn uptime(&self) -> Result<Option<u64>> {
        self.query("uptime", &self.uptime)
    }

    fn memory(&self) -> Result<MemoryFacts> {
        self.query("memory", &self.memory)
    }

    fn graphics(&self) -> Result<GraphicsFacts> {
        self.query("graphics", &self.graphics)
    }

    fn processes(&self) -> Result<Option<u64>> {
        self.query("processes", &self.processes)
    }

    fn battery(&self) -> Result<Option<BatteryFacts>> {
        self.query("battery", &self.battery)
    }

    fn inet_latency(&self) -> Result<Option<f64>> {
        self.query("latency", &self.latency)
    }

    fn public_ip(&self) -> Result<Option<String>> {
        self.query("public_ip", &self.public_ip)
    }

    fn network_interfaces(&self) -> Result<Vec<NetInterface>> {
        self.query("interfaces", &self.interfaces)
    }

    fn shell(&self) -> Result<Option<String>> {
        self.query("shell", &self.shell)
    }

    fn users(&self) -> Result<Vec<UserSession>> {
        self.query("users", &self.users)
    }

    fn current_load(&self) -> Result<Option<f64>> {
        self.query("load", &self.load)
    }

    fn disk_layout(&self) -> Result<Vec<DiskFacts>> {
        self.query("disks", &self.disks)
    }
}

/// One part of every kind, with every option turned on
pub fn every_kind() -> Vec<PartKind> {
    vec![
        PartKind::Separator,
        PartKind::Os(OsOptions {
            show_version: true,
            show_arch: true,
        }),
        PartKind::Cpu(CpuOptions {
            show_cores: true,
            show_speed: true,
            show_temp: true,
        }),
        PartKind::Uptime,
        PartKind::Gpu(GpuOptions { show_vram: true }),
        PartKind::Memory(MemoryOptions { show_percent: true }),
        PartKind::Display(DisplayOptions::default()),
        PartKind::Proc,
        PartKind::Battery(BatteryOptions {
            show_time_remaining: true,
        }),
        PartKind::Ping,
        PartKind::PublicIp,
        PartKind::Net(NetOptions {
            exclude_loopback: true,
        }),
        PartKind::Shell,
        PartKind::Users,
        PartKind::CpuLoad,
        PartKind::Storage,
    ]
}

/// Settings for exact-output assertions: no title, ":" suffix, "-" x 5 rules
pub fn plain_config(parts: Vec<PartSpec>) -> Config {
    Config::from_raw(RawConfig {
        settings: RawSettings {
            title_enabled: false,
            separator_repeat_count: 5,
            ..RawSettings::default()
        },
        parts: parts
            .iter()
            .map(|part| serde_json::to_value(part).unwrap())
            .collect(),
    })
}
