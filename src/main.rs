use anyhow::Result;
use clap::{Arg, Command};

use sysfetch::commands;

fn main() -> Result<()> {
    sysfetch::init_logging();

    let matches = Command::new("sysfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints a configurable summary of system information")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .help("Path to the JSON config file (defaults to <config dir>/sysfetch/config.json)")
                .value_name("CONFIG")
                .index(1),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print the report without colors")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Fetch parts one by one instead of concurrently")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .help("Print the built-in default config and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    commands::fetch(&matches)
}
