use std::fs;
use std::path::Path;

use crate::error::{DashError, Result};
use crate::utils::icons::dotted_extension;

/// Extension → language label
pub const LANGUAGES: &[(&str, &str)] = &[
    (".py", "python"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".nix", "nix"),
    (".sh", "bash"),
    (".bash", "bash"),
    (".zsh", "zsh"),
    (".json", "json"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".md", "markdown"),
    (".rs", "rust"),
    (".go", "go"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".h", "c"),
    (".html", "html"),
    (".css", "css"),
    (".xml", "xml"),
    (".sql", "sql"),
    (".vim", "vim"),
    (".conf", "ini"),
    (".ini", "ini"),
    (".toml", "toml"),
];

pub const PLAIN_TEXT: &str = "text";
const TAB_STOP: &str = "    ";

/// A text file loaded for display
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub language: &'static str,
    pub content: String,
}

impl SourceFile {
    /// Lines with tabs expanded so column widths stay measurable
    pub fn display_lines(&self) -> Vec<String> {
        self.content
            .lines()
            .map(|line| line.replace('\t', TAB_STOP))
            .collect()
    }
}

pub fn detect_language(path: &Path) -> &'static str {
    dotted_extension(path)
        .and_then(|ext| {
            LANGUAGES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, lang)| *lang)
        })
        .unwrap_or(PLAIN_TEXT)
}

pub fn load_source(path: &Path) -> Result<SourceFile> {
    if !path.exists() {
        return Err(DashError::invalid_path(format!(
            "{} does not exist",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(DashError::invalid_path(format!(
            "{} is not a file",
            path.display()
        )));
    }

    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SourceFile {
        name,
        language: detect_language(path),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
