use anyhow::{bail, Result};
use colored::Color;
use std::io::Write;
use std::path::Path;

use crate::core::viewer::{load_source, SourceFile};
use crate::ui::{Column, Console, Panel, Style, StyledText, Table};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();

    let mut console = Console::stdout(!matches.get_flag("no-color"));
    let failures = show_files(&mut console, &files)?;

    if failures > 0 {
        bail!("{} of {} files could not be displayed", failures, files.len());
    }
    Ok(())
}

/// Show each file in its own panel. Returns the number of files that failed to load.
pub fn show_files<W: Write, P: AsRef<Path>>(console: &mut Console<W>, files: &[P]) -> Result<usize> {
    let mut failures = 0;

    for (i, file) in files.iter().enumerate() {
        match load_source(file.as_ref()) {
            Ok(source) => console.print_panel(&source_panel(&source))?,
            Err(e) => {
                failures += 1;
                console.print_error(&format!("Error: {}", e))?;
            }
        }

        if files.len() > 1 && i + 1 < files.len() {
            console.blank_line()?;
        }
    }

    console.flush()?;
    Ok(failures)
}

pub fn source_panel(source: &SourceFile) -> Panel {
    let mut table = Table::grid(vec![
        Column::new("", Style::PLAIN.dim()).right(),
        Column::new("", Style::PLAIN),
    ]);

    for (number, line) in source.display_lines().into_iter().enumerate() {
        table.add_row([
            StyledText::plain((number + 1).to_string()),
            StyledText::plain(line),
        ]);
    }

    Panel::new(
        format!("📄 {} · {}", source.name, source.language),
        Style::fg(Color::Blue),
        table,
    )
}
