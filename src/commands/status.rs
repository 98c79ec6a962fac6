//! Status dashboard command handler.
//!
//! Samples the host once and prints the dashboard panels.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use crate::core::config::DashboardConfig;
use crate::core::snapshot::{SnapshotAssembler, SysinfoCollector};
use crate::ui::{Console, DashboardRenderer};

/// Execute the dashboard: assemble first, render only once assembly succeeded
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = DashboardConfig::load()?;
    apply_overrides(&mut config, matches);
    config.validate().context("Invalid dashboard settings")?;
    debug!("dashboard config: {:?}", config);

    let collector = SysinfoCollector::new(config.cpu_interval());
    let mut assembler = SnapshotAssembler::with_policy(collector, config.assembly_policy());
    let snapshot = assembler
        .assemble()
        .context("Failed to collect system snapshot")?;

    if matches.get_flag("json") {
        Console::stdout(false).print_json(&snapshot)?;
        return Ok(());
    }

    let mut console = Console::stdout(config.color);
    if config.clear_screen && std::io::stdout().is_terminal() {
        console.clear()?;
    }

    let mut renderer = DashboardRenderer::new(console)
        .with_bar_width(config.bar_width)
        .with_thresholds(config.thresholds);
    renderer.render(&snapshot)?;

    Ok(())
}

/// Command-line flags take precedence over the config file
fn apply_overrides(config: &mut DashboardConfig, matches: &ArgMatches) {
    if let Some(&interval) = matches.get_one::<u64>("interval") {
        config.cpu_interval_ms = interval;
    }
    if let Some(&width) = matches.get_one::<usize>("bar-width") {
        config.bar_width = width;
    }
    if let Some(mounts) = matches.get_many::<String>("mounts") {
        config.mounts = mounts.cloned().collect();
    }
    if matches.get_flag("no-color") {
        config.color = false;
    }
    if matches.get_flag("no-clear") {
        config.clear_screen = false;
    }
}
