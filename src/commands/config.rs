use crate::core::DashboardConfig;
use crate::ui::{Console, Style, StyledText};
use anyhow::Result;
use colored::Color;
use std::io::Write;

pub fn handle_config(matches: &clap::ArgMatches) -> Result<()> {
    let mut console = Console::stdout(!matches.get_flag("no-color"));

    match matches.subcommand() {
        Some(("show", _)) => show(&mut console, &DashboardConfig::load()?),
        Some(("path", _)) => {
            let path = DashboardConfig::get_config_path()?;
            console.print_styled(&StyledText::plain(path.display().to_string()))?;
            Ok(())
        }
        Some(("init", sub_matches)) => init(&mut console, sub_matches.get_flag("force")),
        _ => {
            console.print_styled(&StyledText::plain(
                "Use 'sysdash config --help' for more information.",
            ))?;
            Ok(())
        }
    }
}

/// Print the effective configuration as JSON
pub fn show<W: Write>(console: &mut Console<W>, config: &DashboardConfig) -> Result<()> {
    console.print_json(config)?;
    Ok(())
}

/// Write a default config file unless one already exists
fn init<W: Write>(console: &mut Console<W>, force: bool) -> Result<()> {
    let config_path = DashboardConfig::get_config_path()?;

    if config_path.exists() && !force {
        console.print_styled(&StyledText::new(
            format!("Config file already exists: {}", config_path.display()),
            Style::fg(Color::Yellow),
        ))?;
        console.print_styled(&StyledText::new(
            "Use --force to overwrite it with defaults.",
            Style::PLAIN.dim(),
        ))?;
        return Ok(());
    }

    DashboardConfig::default().save_to(&config_path)?;
    console.print_styled(&StyledText::new(
        format!("✓ Wrote default config to {}", config_path.display()),
        Style::fg(Color::Green),
    ))?;
    Ok(())
}
