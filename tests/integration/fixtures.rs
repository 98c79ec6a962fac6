//! Canned collector and snapshot used across the integration tests.

use std::collections::HashMap;
use std::io;

use chrono::{Local, TimeZone};
use sysdash::core::snapshot::*;
use sysdash::{DashError, Result};

/// Per-mount outcome returned by [`StaticCollector::read_disk_usage`]
#[derive(Debug, Clone, Copy)]
pub enum MountOutcome {
    Usage(DiskUsage),
    PermissionDenied,
    Fails,
}

/// A collector answering every read from fixed data
pub struct StaticCollector {
    pub cores: Vec<f32>,
    pub processor: Option<String>,
    pub partitions: Vec<String>,
    pub mounts: HashMap<String, MountOutcome>,
    pub memory_fails: bool,
    /// Every read, in call order
    pub calls: Vec<String>,
}

impl StaticCollector {
    pub fn new() -> Self {
        Self {
            cores: vec![10.0, 20.0, 30.0],
            processor: Some("Test CPU 3000".to_string()),
            partitions: vec!["/".to_string()],
            mounts: HashMap::from([("/".to_string(), MountOutcome::Usage(disk(1000, 250)))]),
            memory_fails: false,
            calls: Vec::new(),
        }
    }

    pub fn with_mount(mut self, path: &str, outcome: MountOutcome) -> Self {
        self.partitions.push(path.to_string());
        self.mounts.insert(path.to_string(), outcome);
        self
    }
}

pub fn disk(total: u64, used: u64) -> DiskUsage {
    DiskUsage {
        total_bytes: total,
        used_bytes: used,
        free_bytes: total - used,
        usage_percent: percent_of(used, total),
    }
}

impl MetricsCollector for StaticCollector {
    fn read_identity(&mut self) -> Result<HostIdentity> {
        self.calls.push("identity".into());
        Ok(HostIdentity {
            identity: SystemIdentity {
                os_name: "Linux".to_string(),
                os_release: "6.1.0".to_string(),
                hostname: "testbox".to_string(),
                machine: "x86_64".to_string(),
                processor: self.processor.clone(),
            },
            boot_time: Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
        })
    }

    fn read_cpu(&mut self) -> Result<CpuReading> {
        self.calls.push("cpu".into());
        Ok(CpuReading {
            cores: self
                .cores
                .iter()
                .enumerate()
                .map(|(core_index, &usage)| CoreSample { core_index, usage })
                .collect(),
            frequency: CpuFrequency {
                current_mhz: 2400.0,
                min_mhz: 800.0,
                max_mhz: 4200.0,
            },
            physical_cores: Some(2),
            logical_cores: self.cores.len(),
        })
    }

    fn read_memory(&mut self) -> Result<MemoryTotals> {
        self.calls.push("memory".into());
        if self.memory_fails {
            return Err(DashError::provider(
                "memory",
                io::Error::new(io::ErrorKind::NotFound, "meminfo missing"),
            ));
        }
        Ok(MemoryTotals {
            total_bytes: 8 * 1024 * 1024 * 1024,
            used_bytes: 4 * 1024 * 1024 * 1024,
            available_bytes: 4 * 1024 * 1024 * 1024,
            usage_percent: 50.0,
        })
    }

    fn read_swap(&mut self) -> Result<SwapTotals> {
        self.calls.push("swap".into());
        Ok(SwapTotals::default())
    }

    fn list_partitions(&mut self) -> Result<Vec<String>> {
        self.calls.push("partitions".into());
        Ok(self.partitions.clone())
    }

    fn read_disk_usage(&mut self, mount_path: &str) -> Result<DiskUsage> {
        self.calls.push(format!("disk {}", mount_path));
        match self.mounts.get(mount_path) {
            Some(MountOutcome::Usage(usage)) => Ok(*usage),
            Some(MountOutcome::PermissionDenied) => Err(DashError::provider(
                format!("disk usage {}", mount_path),
                io::Error::from(io::ErrorKind::PermissionDenied),
            )),
            Some(MountOutcome::Fails) | None => Err(DashError::provider(
                format!("disk usage {}", mount_path),
                io::Error::other("device gone"),
            )),
        }
    }

    fn read_network(&mut self) -> Result<NetworkCounters> {
        self.calls.push("network".into());
        Ok(NetworkCounters {
            bytes_sent: 2048,
            bytes_received: 1_048_576,
            packets_sent: 1234,
            packets_received: 1_234_567,
            errors_in: 1,
            errors_out: 2,
            drops_in: 3,
            drops_out: 4,
        })
    }
}

/// Snapshot assembled from the default [`StaticCollector`]
pub fn sample_snapshot() -> Snapshot {
    SnapshotAssembler::new(StaticCollector::new())
        .assemble()
        .expect("static collector never fails")
}
