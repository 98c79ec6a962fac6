//! Snapshot assembly: ordered reads, mount filtering and derived values.

use chrono::{DateTime, Local};
use log::{debug, warn};

use crate::error::{DashError, Result};

use super::collector::MetricsCollector;
use super::types::*;

/// Mount points shown when no allow-list is configured
pub const DEFAULT_MOUNTS: &[&str] = &["/", "/home", "/boot"];

/// Policy applied while assembling a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyPolicy {
    /// Mount paths to keep, matched exactly
    pub mount_allow_list: Vec<String>,
}

impl Default for AssemblyPolicy {
    fn default() -> Self {
        Self {
            mount_allow_list: DEFAULT_MOUNTS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl AssemblyPolicy {
    pub fn allows(&self, mount_path: &str) -> bool {
        self.mount_allow_list.iter().any(|m| m == mount_path)
    }
}

/// Builds one [`Snapshot`] from fresh collector reads
pub struct SnapshotAssembler<C: MetricsCollector> {
    collector: C,
    policy: AssemblyPolicy,
}

impl<C: MetricsCollector> SnapshotAssembler<C> {
    pub fn new(collector: C) -> Self {
        Self::with_policy(collector, AssemblyPolicy::default())
    }

    pub fn with_policy(collector: C, policy: AssemblyPolicy) -> Self {
        Self { collector, policy }
    }

    pub fn collector(&self) -> &C {
        &self.collector
    }

    /// Read identity, CPU, memory, swap, disk and network, in that order.
    ///
    /// A permission error on a single partition drops that partition; any
    /// other provider failure aborts and no snapshot is produced.
    pub fn assemble(&mut self) -> Result<Snapshot> {
        let host = self.collector.read_identity()?;
        let cpu = self.collector.read_cpu()?;
        let average_usage = average_usage(&cpu.cores)?;
        let memory = self.collector.read_memory()?;
        let swap = self.collector.read_swap()?;
        let disks = self.collect_disks()?;
        let network = self.collector.read_network()?;

        let taken_at = Local::now();
        debug!(
            "snapshot assembled: {} cores, {} disks",
            cpu.cores.len(),
            disks.len()
        );

        Ok(Snapshot {
            uptime_secs: uptime_seconds(&host.boot_time, &taken_at),
            identity: host.identity,
            boot_time: host.boot_time,
            taken_at,
            cpu: CpuSnapshot {
                physical_cores: cpu.physical_cores,
                logical_cores: cpu.logical_cores,
                frequency: cpu.frequency,
                cores: cpu.cores,
                average_usage,
            },
            memory,
            swap,
            disks,
            network,
        })
    }

    fn collect_disks(&mut self) -> Result<Vec<DiskMountSample>> {
        let partitions = self.collector.list_partitions()?;
        let mut disks = Vec::new();

        for mount_path in partitions {
            if !self.policy.allows(&mount_path) {
                continue;
            }

            match self.collector.read_disk_usage(&mount_path) {
                Ok(usage) => disks.push(DiskMountSample::new(mount_path, usage)),
                Err(e) if e.is_permission_denied() => {
                    warn!("Skipping {}: permission denied", mount_path);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(disks)
    }
}

/// Arithmetic mean of core usages
pub fn average_usage(cores: &[CoreSample]) -> Result<f32> {
    if cores.is_empty() {
        return Err(DashError::NoCoresReported);
    }
    let sum: f64 = cores.iter().map(|c| c.usage as f64).sum();
    Ok((sum / cores.len() as f64) as f32)
}

/// Seconds since boot, truncated: the sub-second part is discarded, never rounded.
pub fn uptime_seconds(boot_time: &DateTime<Local>, now: &DateTime<Local>) -> u64 {
    (*now - *boot_time).num_seconds().max(0) as u64
}
