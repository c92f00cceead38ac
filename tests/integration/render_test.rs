use super::support::{every_kind, FakeFacts};
use sysfetch::core::config::*;
use sysfetch::core::render::{render, Row, RowValue};
use sysfetch::core::system_info::*;

fn rendered(kind: PartKind, facts: &FakeFacts) -> Option<Row> {
    render(&PartSpec::new(kind), facts)
}

fn value(kind: PartKind, facts: &FakeFacts) -> Option<String> {
    match rendered(kind, facts)? {
        Row::Entry { value, .. } => Some(value.to_string()),
        Row::Separator => panic!("expected an entry row"),
    }
}

#[test]
fn test_disabled_parts_never_render() {
    let facts = FakeFacts::sample();
    for kind in every_kind() {
        assert_eq!(render(&PartSpec::disabled(kind), &facts), None, "{:?}", kind);
    }
}

#[test]
fn test_enabled_parts_render_with_sample_facts() {
    let facts = FakeFacts::sample();
    for kind in every_kind() {
        assert!(rendered(kind, &facts).is_some(), "{:?}", kind);
    }
}

#[test]
fn test_provider_error_same_as_absent_facts() {
    let failing = FakeFacts::sample().failing_everything();
    let absent = FakeFacts::default();

    for kind in every_kind() {
        let from_error = rendered(kind, &failing);
        let from_absent = rendered(kind, &absent);
        assert_eq!(from_error, from_absent, "{:?}", kind);

        if kind != PartKind::Separator {
            assert_eq!(from_error, None, "{:?}", kind);
        }
    }
}

#[test]
fn test_separator_renders_marker() {
    let facts = FakeFacts::default();
    assert_eq!(rendered(PartKind::Separator, &facts), Some(Row::Separator));
}

#[test]
fn test_labels() {
    let facts = FakeFacts::sample();
    let label = |kind| match rendered(kind, &facts) {
        Some(Row::Entry { label, .. }) => label,
        other => panic!("unexpected {:?}", other),
    };

    assert_eq!(label(PartKind::Os(OsOptions::default())), "OS");
    assert_eq!(label(PartKind::Proc), "Processes");
    assert_eq!(label(PartKind::PublicIp), "Public IP");
    assert_eq!(label(PartKind::Users), "Online");
    assert_eq!(label(PartKind::CpuLoad), "CPU Load");
}

#[test]
fn test_os_options() {
    let facts = FakeFacts::sample();

    assert_eq!(
        value(
            PartKind::Os(OsOptions {
                show_version: true,
                show_arch: true
            }),
            &facts
        ),
        Some("Ubuntu, 22.04 (x86_64)".to_string())
    );
    assert_eq!(
        value(PartKind::Os(OsOptions::default()), &facts),
        Some("Ubuntu".to_string())
    );

    let mut no_release = FakeFacts::sample();
    no_release.os.release = None;
    assert_eq!(
        value(
            PartKind::Os(OsOptions {
                show_version: true,
                show_arch: false
            }),
            &no_release
        ),
        Some("Ubuntu".to_string())
    );
}

#[test]
fn test_os_requires_distro() {
    let mut facts = FakeFacts::sample();
    facts.os.distro = Some("  ".to_string());
    assert_eq!(rendered(PartKind::Os(OsOptions::default()), &facts), None);
}

#[test]
fn test_cpu_options() {
    let facts = FakeFacts::sample();
    let all = CpuOptions {
        show_cores: true,
        show_speed: true,
        show_temp: true,
    };

    assert_eq!(
        value(PartKind::Cpu(all), &facts),
        Some("Intel Core i7-8700K (6) @ 3.7GHz (45.5 °C)".to_string())
    );
    assert_eq!(
        value(PartKind::Cpu(CpuOptions::default()), &facts),
        Some("Intel Core i7-8700K".to_string())
    );

    let mut no_sensors = FakeFacts::sample();
    no_sensors.cpu.physical_cores = Some(0);
    no_sensors.cpu.speed_ghz = Some(-1.0);
    no_sensors.cpu.temperature_celsius = None;
    assert_eq!(
        value(PartKind::Cpu(all), &no_sensors),
        Some("Intel Core i7-8700K".to_string())
    );
}

#[test]
fn test_cpu_requires_manufacturer_and_brand() {
    let mut facts = FakeFacts::sample();
    facts.cpu.brand = None;
    assert_eq!(rendered(PartKind::Cpu(CpuOptions::default()), &facts), None);
}

#[test]
fn test_uptime() {
    let mut facts = FakeFacts::sample();
    assert_eq!(
        value(PartKind::Uptime, &facts),
        Some("1 day, 1 hour, 0 minutes".to_string())
    );

    facts.uptime = Some(45);
    assert_eq!(value(PartKind::Uptime, &facts), Some("45 seconds".to_string()));

    facts.uptime = None;
    assert_eq!(rendered(PartKind::Uptime, &facts), None);
}

#[test]
fn test_gpu_vram() {
    let mut facts = FakeFacts::sample();
    facts.graphics.controllers.push(GpuController {
        vendor: Some("Intel Corporation".to_string()),
        model: Some("UHD Graphics 630".to_string()),
        vram_bytes: Some(0),
    });
    facts.graphics.controllers.push(GpuController {
        vendor: Some("Unknown".to_string()),
        model: None,
        vram_bytes: Some(1024),
    });

    assert_eq!(
        value(PartKind::Gpu(GpuOptions { show_vram: true }), &facts),
        Some("GeForce GTX 1080 (8.0 GB), UHD Graphics 630".to_string())
    );
    assert_eq!(
        value(PartKind::Gpu(GpuOptions { show_vram: false }), &facts),
        Some("GeForce GTX 1080, UHD Graphics 630".to_string())
    );
}

#[test]
fn test_gpu_requires_a_model() {
    let mut facts = FakeFacts::sample();
    facts.graphics.controllers = vec![GpuController::default()];
    assert_eq!(rendered(PartKind::Gpu(GpuOptions::default()), &facts), None);
}

#[test]
fn test_memory() {
    let facts = FakeFacts::sample();

    assert_eq!(
        value(PartKind::Memory(MemoryOptions { show_percent: true }), &facts),
        Some("4096.0 MB / 16384.0 MB (25 %)".to_string())
    );
    assert_eq!(
        value(PartKind::Memory(MemoryOptions::default()), &facts),
        Some("4096.0 MB / 16384.0 MB".to_string())
    );
}

#[test]
fn test_memory_percent_two_decimals() {
    let mut facts = FakeFacts::sample();
    facts.memory.active_bytes = Some(1);
    facts.memory.total_bytes = Some(3);

    assert_eq!(
        value(PartKind::Memory(MemoryOptions { show_percent: true }), &facts),
        Some("1 B / 3 B (33.33 %)".to_string())
    );
}

#[test]
fn test_memory_requires_both_values() {
    let mut facts = FakeFacts::sample();
    facts.memory.total_bytes = Some(0);
    assert_eq!(rendered(PartKind::Memory(MemoryOptions::default()), &facts), None);

    let mut facts = FakeFacts::sample();
    facts.memory.active_bytes = None;
    assert_eq!(rendered(PartKind::Memory(MemoryOptions::default()), &facts), None);
}

#[test]
fn test_display_main_only() {
    let facts = FakeFacts::sample();

    assert_eq!(
        value(PartKind::Display(DisplayOptions::default()), &facts),
        Some("1920x1080, 2560x1440".to_string())
    );
    assert_eq!(
        value(
            PartKind::Display(DisplayOptions {
                main_display_only: true
            }),
            &facts
        ),
        Some("1920x1080".to_string())
    );

    let mut no_main = FakeFacts::sample();
    for display in &mut no_main.graphics.displays {
        display.main = false;
    }
    assert_eq!(
        rendered(
            PartKind::Display(DisplayOptions {
                main_display_only: true
            }),
            &no_main
        ),
        None
    );
}

#[test]
fn test_proc_is_a_count() {
    let facts = FakeFacts::sample();
    assert_eq!(
        rendered(PartKind::Proc, &facts),
        Some(Row::entry("Processes", RowValue::Count(312)))
    );

    let mut idle = FakeFacts::sample();
    idle.processes = Some(0);
    assert_eq!(value(PartKind::Proc, &idle), Some("0".to_string()));
}

#[test]
fn test_battery() {
    let with_time = PartKind::Battery(BatteryOptions {
        show_time_remaining: true,
    });
    let facts = FakeFacts::sample();

    assert_eq!(
        value(with_time, &facts),
        Some("87% (1 hour, 30 minutes)".to_string())
    );
    assert_eq!(
        value(PartKind::Battery(BatteryOptions::default()), &facts),
        Some("87%".to_string())
    );

    let mut charging = FakeFacts::sample();
    if let Some(battery) = charging.battery.as_mut() {
        battery.charging = true;
    }
    assert_eq!(value(with_time, &charging), Some("87% (charging)".to_string()));

    let mut unknown_time = FakeFacts::sample();
    if let Some(battery) = unknown_time.battery.as_mut() {
        battery.minutes_remaining = None;
    }
    assert_eq!(value(with_time, &unknown_time), Some("87%".to_string()));
}

#[test]
fn test_battery_missing_or_negative() {
    let mut desktop = FakeFacts::sample();
    desktop.battery = None;
    assert_eq!(rendered(PartKind::Battery(BatteryOptions::default()), &desktop), None);

    let mut broken = FakeFacts::sample();
    if let Some(battery) = broken.battery.as_mut() {
        battery.percent = Some(-1.0);
    }
    assert_eq!(rendered(PartKind::Battery(BatteryOptions::default()), &broken), None);
}

#[test]
fn test_ping() {
    let mut facts = FakeFacts::sample();
    assert_eq!(value(PartKind::Ping, &facts), Some("24ms".to_string()));

    facts.latency = Some(-1.0);
    assert_eq!(rendered(PartKind::Ping, &facts), None);
}

#[test]
fn test_public_ip() {
    let mut facts = FakeFacts::sample();
    assert_eq!(value(PartKind::PublicIp, &facts), Some("203.0.113.7".to_string()));

    facts.public_ip = Some(String::new());
    assert_eq!(rendered(PartKind::PublicIp, &facts), None);
}

#[test]
fn test_net_excludes_loopback() {
    let facts = FakeFacts::sample();

    assert_eq!(
        value(
            PartKind::Net(NetOptions {
                exclude_loopback: true
            }),
            &facts
        ),
        Some("10.0.0.5 (eth0)".to_string())
    );
    assert_eq!(
        value(PartKind::Net(NetOptions::default()), &facts),
        Some("10.0.0.5 (eth0), 127.0.0.1 (lo0)".to_string())
    );
}

#[test]
fn test_net_skips_interfaces_without_address() {
    let mut facts = FakeFacts::sample();
    facts.interfaces = vec![
        NetInterface {
            name: Some("wlan0".to_string()),
            ip4: None,
        },
        NetInterface {
            name: Some("lo".to_string()),
            ip4: Some("127.0.0.1".to_string()),
        },
    ];

    assert_eq!(
        rendered(
            PartKind::Net(NetOptions {
                exclude_loopback: true
            }),
            &facts
        ),
        None
    );
}

#[test]
fn test_shell_users_and_load() {
    let facts = FakeFacts::sample();

    assert_eq!(value(PartKind::Shell, &facts), Some("zsh".to_string()));
    assert_eq!(value(PartKind::Users, &facts), Some("alice, bob".to_string()));
    assert_eq!(value(PartKind::CpuLoad, &facts), Some("12.30%".to_string()));
}

#[test]
fn test_users_requires_a_name() {
    let mut facts = FakeFacts::sample();
    facts.users = vec![UserSession::default()];
    assert_eq!(rendered(PartKind::Users, &facts), None);
}

#[test]
fn test_cpu_load_zero_is_valid() {
    let mut facts = FakeFacts::sample();
    facts.load = Some(0.0);
    assert_eq!(value(PartKind::CpuLoad, &facts), Some("0.00%".to_string()));

    facts.load = Some(-5.0);
    assert_eq!(rendered(PartKind::CpuLoad, &facts), None);
}

#[test]
fn test_storage() {
    let mut facts = FakeFacts::sample();
    facts.disks.push(DiskFacts {
        name: Some("sda".to_string()),
        interface: Some("USB".to_string()),
        kind: DiskKind::Hdd,
        size_bytes: Some(2 * 1024 * 1024 * 1024 * 1024),
    });

    assert_eq!(
        value(PartKind::Storage, &facts),
        Some("SSD 476.9 GB (nvme0n1), USB HDD 2048.0 GB (sda)".to_string())
    );
}

#[test]
fn test_exact_halves_round_up() {
    let mut facts = FakeFacts::sample();
    facts.latency = Some(22.5);
    facts.load = Some(0.125);
    facts.memory.active_bytes = Some(1280);
    facts.memory.total_bytes = Some(2048);
    if let Some(battery) = facts.battery.as_mut() {
        battery.percent = Some(62.5);
    }

    assert_eq!(value(PartKind::Ping, &facts), Some("23ms".to_string()));
    assert_eq!(value(PartKind::CpuLoad, &facts), Some("0.13%".to_string()));
    assert_eq!(
        value(PartKind::Battery(BatteryOptions::default()), &facts),
        Some("63%".to_string())
    );
    assert_eq!(
        value(PartKind::Memory(MemoryOptions { show_percent: true }), &facts),
        Some("1.3 KB / 2.0 KB (62.5 %)".to_string())
    );
}
