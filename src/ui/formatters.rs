use chrono::{DateTime, Local};
use std::fs;

/// Unit scale used by the dashboard (memory, disk, network byte counts)
pub const DASHBOARD_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Unit scale used by the directory listing
pub const LISTING_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Scale a byte count by powers of 1024 and format it with `precision` decimals.
///
/// The value is divided while it is at least 1024 and a larger unit remains;
/// anything beyond the last unit stays at that unit, however large.
pub fn humanize_bytes(bytes: u64, precision: usize, units: &[&str]) -> String {
    let mut value = bytes as f64;
    let mut tier = 0;

    while value >= 1024.0 && tier + 1 < units.len() {
        value /= 1024.0;
        tier += 1;
    }

    let unit = units.get(tier).copied().unwrap_or("B");
    format!("{:.*}{}", precision, value, unit)
}

/// Format a byte count for the dashboard (two decimals, up to PB)
pub fn format_bytes(bytes: u64) -> String {
    humanize_bytes(bytes, 2, DASHBOARD_UNITS)
}

/// Format file size for listings (one decimal, up to TB)
pub fn format_size(size: u64) -> String {
    humanize_bytes(size, 1, LISTING_UNITS)
}

/// Format a counter with thousands separators (1,234,567)
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format an uptime in whole seconds as `H:MM:SS`, with a day prefix when needed
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    match days {
        0 => format!("{}:{:02}:{:02}", hours, minutes, seconds),
        1 => format!("1 day, {}:{:02}:{:02}", hours, minutes, seconds),
        d => format!("{} days, {}:{:02}:{:02}", d, hours, minutes, seconds),
    }
}

/// Format a timestamp to the second (YYYY-MM-DD HH:MM:SS)
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format timestamp in human-readable format (YYYY-MM-DD HH:MM)
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// Format file permissions as owner/group/other triplets
#[cfg(unix)]
pub fn format_permissions(metadata: &fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    BITS.iter()
        .map(|&(bit, ch)| if mode & bit != 0 { ch } else { '-' })
        .collect()
}

/// Format file permissions (read-only flag only on this platform)
#[cfg(not(unix))]
pub fn format_permissions(metadata: &fs::Metadata) -> String {
    if metadata.permissions().readonly() {
        "r--r--r--".to_string()
    } else {
        "rw-rw-rw-".to_string()
    }
}
