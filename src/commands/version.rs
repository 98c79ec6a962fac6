use anyhow::Result;

use crate::ui::{Console, StyledText};

pub fn execute() -> Result<()> {
    let mut console = Console::stdout(false);
    console.print_styled(&StyledText::plain(version_line()))?;
    Ok(())
}

pub fn version_line() -> String {
    format!("sysdash version {}", env!("CARGO_PKG_VERSION"))
}
