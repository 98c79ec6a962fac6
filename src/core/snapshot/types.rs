use chrono::{DateTime, Local};
use serde::Serialize;

/// Per-logical-processor usage sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoreSample {
    pub core_index: usize,
    pub usage: f32,
}

/// CPU frequency triple, in MHz. Bounds are 0.0 when the host does not expose them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CpuFrequency {
    pub current_mhz: f64,
    pub min_mhz: f64,
    pub max_mhz: f64,
}

/// Host identity as read from the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemIdentity {
    pub os_name: String,
    pub os_release: String,
    pub hostname: String,
    pub machine: String,
    /// Absent on hosts that do not report a processor brand
    pub processor: Option<String>,
}

/// Identity read plus the boot timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct HostIdentity {
    pub identity: SystemIdentity,
    pub boot_time: DateTime<Local>,
}

/// Raw CPU read: per-core usage over the sampling interval plus static facts
#[derive(Debug, Clone, PartialEq)]
pub struct CpuReading {
    pub cores: Vec<CoreSample>,
    pub frequency: CpuFrequency,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MemoryTotals {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub usage_percent: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SwapTotals {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f32,
}

/// Usage of one mounted filesystem
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskMountSample {
    pub mount_path: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f32,
}

impl DiskMountSample {
    pub fn new(mount_path: String, usage: DiskUsage) -> Self {
        Self {
            mount_path,
            total_bytes: usage.total_bytes,
            used_bytes: usage.used_bytes,
            free_bytes: usage.free_bytes,
            usage_percent: usage.usage_percent,
        }
    }
}

/// Cumulative-since-boot network counters summed over all interfaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkCounters {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
    pub errors_in: u64,
    pub errors_out: u64,
    pub drops_in: u64,
    pub drops_out: u64,
}

impl NetworkCounters {
    /// Add another interface's counters, saturating
    pub fn accumulate(&mut self, other: &NetworkCounters) {
        self.bytes_sent = self.bytes_sent.saturating_add(other.bytes_sent);
        self.bytes_received = self.bytes_received.saturating_add(other.bytes_received);
        self.packets_sent = self.packets_sent.saturating_add(other.packets_sent);
        self.packets_received = self.packets_received.saturating_add(other.packets_received);
        self.errors_in = self.errors_in.saturating_add(other.errors_in);
        self.errors_out = self.errors_out.saturating_add(other.errors_out);
        self.drops_in = self.drops_in.saturating_add(other.drops_in);
        self.drops_out = self.drops_out.saturating_add(other.drops_out);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuSnapshot {
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub frequency: CpuFrequency,
    pub cores: Vec<CoreSample>,
    pub average_usage: f32,
}

/// One fully-assembled set of host metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub identity: SystemIdentity,
    pub boot_time: DateTime<Local>,
    pub taken_at: DateTime<Local>,
    pub uptime_secs: u64,
    pub cpu: CpuSnapshot,
    pub memory: MemoryTotals,
    pub swap: SwapTotals,
    pub disks: Vec<DiskMountSample>,
    pub network: NetworkCounters,
}

/// Percentage of `part` in `whole`, 0.0 for an empty whole
pub fn percent_of(part: u64, whole: u64) -> f32 {
    if whole > 0 {
        (part as f64 / whole as f64 * 100.0) as f32
    } else {
        0.0
    }
}
