// Host identity queries not covered by sysinfo

/// Kernel name as reported by uname(2), e.g. "Linux" or "Darwin".
#[cfg(unix)]
pub fn kernel_name() -> Option<String> {
    use std::ffi::CStr;

    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }

    let sysname = unsafe { CStr::from_ptr(uts.sysname.as_ptr()) };
    Some(sysname.to_string_lossy().into_owned()).filter(|name| !name.is_empty())
}

#[cfg(not(unix))]
pub fn kernel_name() -> Option<String> {
    None
}
