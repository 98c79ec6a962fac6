//! Directory listing scanner
//!
//! Reads one directory level and describes each entry for the `ls` table.
//!
//! # Examples
//!
//! ```no_run
//! use sysdash::core::listing::scan_directory;
//! use std::path::Path;
//!
//! let listing = scan_directory(Path::new("."))?;
//! println!("{} directories, {} files", listing.dir_count, listing.file_count);
//! # Ok::<(), sysdash::DashError>(())
//! ```

use chrono::{DateTime, Local};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashError, Result};
use crate::ui::formatters::format_permissions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    Executable,
    File,
}

/// Metadata shown for a readable entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetails {
    pub kind: EntryKind,
    /// Regular files only
    pub size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
    pub permissions: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingEntry {
    pub name: String,
    /// `None` when the entry's metadata could not be read
    pub details: Option<EntryDetails>,
}

#[derive(Debug, Clone)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub entries: Vec<ListingEntry>,
    pub dir_count: usize,
    pub file_count: usize,
}

/// Scan a directory: directories first, then case-insensitive name order.
pub fn scan_directory(path: &Path) -> Result<DirectoryListing> {
    if !path.exists() {
        return Err(DashError::invalid_path(format!(
            "{} does not exist",
            path.display()
        )));
    }

    let absolute = fs::canonicalize(path)?;
    let mut rows: Vec<(bool, ListingEntry)> = Vec::new();
    let mut dir_count = 0;
    let mut file_count = 0;

    for entry in fs::read_dir(&absolute)? {
        let entry = entry?;
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        // Follows symlinks, so a link to a directory sorts and counts as one
        let details = match fs::metadata(&entry_path) {
            Ok(metadata) => Some(describe(&entry_path, &metadata)),
            Err(e) => {
                debug!("Cannot stat {:?}: {}", entry_path, e);
                None
            }
        };

        let is_dir = matches!(
            details,
            Some(EntryDetails {
                kind: EntryKind::Directory,
                ..
            })
        );
        if is_dir {
            dir_count += 1;
        } else if entry_path.is_file() {
            file_count += 1;
        }

        rows.push((is_dir, ListingEntry { name, details }));
    }

    rows.sort_by(|(a_dir, a), (b_dir, b)| {
        b_dir
            .cmp(a_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(DirectoryListing {
        path: absolute,
        entries: rows.into_iter().map(|(_, entry)| entry).collect(),
        dir_count,
        file_count,
    })
}

fn describe(path: &Path, metadata: &fs::Metadata) -> EntryDetails {
    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else if path.is_symlink() {
        EntryKind::Symlink
    } else if is_executable(metadata) {
        EntryKind::Executable
    } else {
        EntryKind::File
    };

    EntryDetails {
        kind,
        size: metadata.is_file().then(|| metadata.len()),
        modified: metadata.modified().ok().map(DateTime::<Local>::from),
        permissions: format_permissions(metadata),
    }
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}
