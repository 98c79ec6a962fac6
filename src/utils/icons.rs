//! File icon utilities
//!
//! Icons are looked up in an ordered (extension, icon) table.

use std::path::Path;

pub const DIRECTORY_ICON: &str = "📁";
pub const DEFAULT_FILE_ICON: &str = "📄";
pub const ERROR_ICON: &str = "❌";

/// Extension → icon, extensions lowercase with the leading dot
pub const FILE_ICONS: &[(&str, &str)] = &[
    (".py", "🐍"),
    (".js", "📜"),
    (".ts", "📘"),
    (".nix", "❄️"),
    (".md", "📝"),
    (".txt", "📄"),
    (".json", "📊"),
    (".yaml", "⚙️"),
    (".yml", "⚙️"),
    (".sh", "🔧"),
    (".bash", "🔧"),
    (".git", "🔀"),
    (".png", "🖼️"),
    (".jpg", "🖼️"),
    (".jpeg", "🖼️"),
    (".gif", "🖼️"),
    (".mp3", "🎵"),
    (".mp4", "🎥"),
    (".zip", "📦"),
    (".tar", "📦"),
    (".gz", "📦"),
    (".pdf", "📕"),
    (".rs", "🦀"),
    (".go", "🐹"),
    (".cpp", "⚡"),
    (".c", "⚡"),
    (".h", "⚡"),
];

/// Lowercase extension of `path` with its leading dot, if any
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Returns the icon for a file name based on its extension
///
/// # Examples
///
/// ```
/// use sysdash::utils::icons::get_file_icon;
///
/// assert_eq!(get_file_icon("main.rs"), "🦀");
/// assert_eq!(get_file_icon("Makefile"), "📄");
/// ```
pub fn get_file_icon(filename: &str) -> &'static str {
    let Some(ext) = dotted_extension(Path::new(filename)) else {
        return DEFAULT_FILE_ICON;
    };

    FILE_ICONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_FILE_ICON)
}
