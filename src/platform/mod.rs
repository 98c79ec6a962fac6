// Platform-specific code module

pub mod fs;
pub mod host;
#[cfg(target_os = "linux")]
pub mod linux;

pub use fs::mount_usage;
pub use host::kernel_name;
