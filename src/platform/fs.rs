// Platform-specific filesystem queries

use crate::core::snapshot::{percent_of, DiskUsage};
use std::io;
use std::path::Path;

/// Usage of the filesystem mounted at `path`, via statvfs(3).
///
/// Errors carry the OS errno, so a refused mount surfaces as
/// `ErrorKind::PermissionDenied`.
#[cfg(unix)]
pub fn mount_usage(path: &Path) -> io::Result<DiskUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let frsize = stat.f_frsize as u64;
    let blocks = stat.f_blocks as u64;
    let total = blocks.saturating_mul(frsize);
    let free = (stat.f_bavail as u64).saturating_mul(frsize);
    let used = blocks
        .saturating_sub(stat.f_bfree as u64)
        .saturating_mul(frsize);

    // Reserved blocks count as neither used nor free for the percentage
    Ok(DiskUsage {
        total_bytes: total,
        used_bytes: used,
        free_bytes: free,
        usage_percent: percent_of(used, used.saturating_add(free)),
    })
}

#[cfg(not(unix))]
pub fn mount_usage(path: &Path) -> io::Result<DiskUsage> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|d| d.mount_point() == path)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "mount point not found"))?;

    let total = disk.total_space();
    let free = disk.available_space();
    let used = total.saturating_sub(free);
    Ok(DiskUsage {
        total_bytes: total,
        used_bytes: used,
        free_bytes: free,
        usage_percent: percent_of(used, total),
    })
}
