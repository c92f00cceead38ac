use crate::core::config::{Config, RawConfig};
use crate::core::fetch::{render_parts, render_parts_sequential};
use crate::core::report::assemble;
use crate::core::system_info::{FactsProvider, HostFacts};
use crate::ui::Painter;
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Hostname shown in the header when the system does not report one
const UNKNOWN_HOST: &str = "localhost";

pub fn execute(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("print-config") {
        let json = serde_json::to_string_pretty(&RawConfig::default())
            .context("Failed to serialize default config")?;
        println!("{}", json);
        return Ok(());
    }

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    let painter = Painter::new(!matches.get_flag("no-color") && std::io::stdout().is_terminal());
    let facts: Arc<dyn FactsProvider> = Arc::new(HostFacts::new());

    let report = if matches.get_flag("sequential") {
        build_report_sequential(&config, facts.as_ref(), &painter)
    } else {
        build_report(&config, facts, &painter)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report")?;

    Ok(())
}

/// Render all parts concurrently and assemble the report
pub fn build_report(
    config: &Config,
    facts: Arc<dyn FactsProvider>,
    painter: &Painter,
) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .thread_name("sysfetch-worker")
        .build()
        .context("Failed to start async runtime")?;

    let rows = runtime.block_on(render_parts(&config.parts, Arc::clone(&facts)));
    let hostname = header_hostname(config, facts.as_ref());

    Ok(assemble(&rows, config, &hostname, painter))
}

pub fn build_report_sequential(
    config: &Config,
    facts: &dyn FactsProvider,
    painter: &Painter,
) -> String {
    let rows = render_parts_sequential(&config.parts, facts);
    let hostname = header_hostname(config, facts);
    assemble(&rows, config, &hostname, painter)
}

fn header_hostname(config: &Config, facts: &dyn FactsProvider) -> String {
    if !config.settings.title_enabled {
        return String::new();
    }

    match facts.hostname() {
        Ok(Some(name)) if !name.trim().is_empty() => name,
        Ok(_) => UNKNOWN_HOST.to_string(),
        Err(e) => {
            log::warn!("Failed to read hostname: {}", e);
            UNKNOWN_HOST.to_string()
        }
    }
}
