use anyhow::{Context, Result};
use colored::Color;
use std::io::Write;
use std::path::Path;

use crate::core::listing::{scan_directory, DirectoryListing, EntryKind};
use crate::ui::formatters::{format_size, format_time};
use crate::ui::{Column, Console, Panel, Style, StyledText, Table};
use crate::utils::icons::{get_file_icon, DIRECTORY_ICON, ERROR_ICON};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or(".");

    let listing = scan_directory(Path::new(path))
        .with_context(|| format!("Cannot list {}", path))?;

    let mut console = Console::stdout(!matches.get_flag("no-color"));
    render_listing(&mut console, &listing)?;
    Ok(())
}

/// Print the listing table and the directory/file summary
pub fn render_listing<W: Write>(console: &mut Console<W>, listing: &DirectoryListing) -> Result<()> {
    let panel = Panel::new(
        format!("📂 {}", listing.path.display()),
        Style::PLAIN,
        listing_table(listing),
    );
    console.print_panel(&panel)?;
    console.blank_line()?;
    console.print_styled(&StyledText::new(
        format!(
            "{} directories, {} files",
            listing.dir_count, listing.file_count
        ),
        Style::PLAIN.dim(),
    ))?;
    console.flush()?;
    Ok(())
}

pub fn listing_table(listing: &DirectoryListing) -> Table {
    let mut table = Table::with_columns(vec![
        Column::new("Type", Style::fg(Color::Cyan)),
        Column::new("Name", Style::PLAIN.bold()),
        Column::new("Size", Style::fg(Color::Green)).right(),
        Column::new("Modified", Style::fg(Color::Yellow)),
        Column::new("Permissions", Style::fg(Color::Blue)),
    ]);

    for entry in &listing.entries {
        let Some(details) = &entry.details else {
            table.add_row([
                StyledText::plain(ERROR_ICON),
                StyledText::new(entry.name.clone(), Style::fg(Color::Red)),
                StyledText::plain("?"),
                StyledText::plain("?"),
                StyledText::plain("?"),
            ]);
            continue;
        };

        let (icon, name_style) = match details.kind {
            EntryKind::Directory => (DIRECTORY_ICON, Style::fg(Color::Blue).bold()),
            EntryKind::Symlink => (get_file_icon(&entry.name), Style::fg(Color::Cyan)),
            EntryKind::Executable => (get_file_icon(&entry.name), Style::fg(Color::Green).bold()),
            EntryKind::File => (get_file_icon(&entry.name), Style::PLAIN),
        };

        table.add_row([
            StyledText::plain(icon),
            StyledText::new(entry.name.clone(), name_style),
            StyledText::plain(details.size.map(format_size).unwrap_or_else(|| "-".to_string())),
            StyledText::plain(
                details
                    .modified
                    .as_ref()
                    .map(format_time)
                    .unwrap_or_else(|| "?".to_string()),
            ),
            StyledText::plain(details.permissions.clone()),
        ]);
    }

    table
}
