use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};

use chrono::{DateTime, Local};
use log::debug;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::error::{DashError, Result};
use crate::platform;

use super::types::*;

/// Read surface of the host metrics provider: one blocking read per category.
///
/// Every read fails with [`DashError::ProviderUnavailable`] when the provider
/// cannot answer.
pub trait MetricsCollector {
    fn read_identity(&mut self) -> Result<HostIdentity>;

    /// Per-core usage over the sampling interval. Blocks for that interval.
    fn read_cpu(&mut self) -> Result<CpuReading>;

    fn read_memory(&mut self) -> Result<MemoryTotals>;

    fn read_swap(&mut self) -> Result<SwapTotals>;

    /// Mount paths of all mounted partitions, in provider enumeration order
    fn list_partitions(&mut self) -> Result<Vec<String>>;

    fn read_disk_usage(&mut self, mount_path: &str) -> Result<DiskUsage>;

    fn read_network(&mut self) -> Result<NetworkCounters>;
}

/// Collects host metrics through `sysinfo`, with Linux procfs/sysfs supplements
pub struct SysinfoCollector {
    system: System,
    cpu_interval: Duration,
}

impl SysinfoCollector {
    pub fn new(cpu_interval: Duration) -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Self {
            system: System::new_with_specifics(refresh_kind),
            cpu_interval: cpu_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    fn frequency_bounds(core_count: usize) -> (f64, f64) {
        #[cfg(target_os = "linux")]
        {
            if let Some(bounds) = platform::linux::read_cpufreq_bounds(core_count) {
                return bounds;
            }
            debug!("cpufreq bounds not exposed for {} cores", core_count);
        }
        #[cfg(not(target_os = "linux"))]
        let _ = core_count;

        (0.0, 0.0)
    }
}

/// Kernel name first ("Linux"), then sysinfo's OS name, then the build target
fn os_name() -> String {
    platform::kernel_name()
        .or_else(System::name)
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl MetricsCollector for SysinfoCollector {
    fn read_identity(&mut self) -> Result<HostIdentity> {
        let boot_secs = System::boot_time();
        if boot_secs == 0 {
            return Err(DashError::provider_msg("boot time", "provider reported no boot time"));
        }
        let boot_time: DateTime<Local> = (UNIX_EPOCH + Duration::from_secs(boot_secs)).into();

        let processor = self
            .system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        Ok(HostIdentity {
            identity: SystemIdentity {
                os_name: os_name(),
                os_release: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
                hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
                machine: std::env::consts::ARCH.to_string(),
                processor,
            },
            boot_time,
        })
    }

    fn read_cpu(&mut self) -> Result<CpuReading> {
        // Usage is a delta between two refreshes, so sample across the interval
        self.system.refresh_cpu_usage();
        std::thread::sleep(self.cpu_interval);
        self.system.refresh_cpu_all();

        let cpus = self.system.cpus();
        let cores: Vec<CoreSample> = cpus
            .iter()
            .enumerate()
            .map(|(core_index, cpu)| CoreSample {
                core_index,
                usage: cpu.cpu_usage(),
            })
            .collect();

        let current_mhz = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|cpu| cpu.frequency() as f64).sum::<f64>() / cpus.len() as f64
        };
        let (min_mhz, max_mhz) = Self::frequency_bounds(cpus.len());

        Ok(CpuReading {
            logical_cores: cpus.len(),
            physical_cores: System::physical_core_count(),
            frequency: CpuFrequency {
                current_mhz,
                min_mhz,
                max_mhz,
            },
            cores,
        })
    }

    fn read_memory(&mut self) -> Result<MemoryTotals> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(DashError::provider_msg("memory", "provider reported zero total memory"));
        }
        let available = self.system.available_memory();
        let used = total.saturating_sub(available);

        Ok(MemoryTotals {
            total_bytes: total,
            used_bytes: used,
            available_bytes: available,
            usage_percent: percent_of(used, total),
        })
    }

    fn read_swap(&mut self) -> Result<SwapTotals> {
        self.system.refresh_memory();

        let total = self.system.total_swap();
        let used = self.system.used_swap();

        Ok(SwapTotals {
            total_bytes: total,
            used_bytes: used,
            free_bytes: self.system.free_swap(),
            usage_percent: percent_of(used, total),
        })
    }

    fn list_partitions(&mut self) -> Result<Vec<String>> {
        let disks = Disks::new_with_refreshed_list();
        Ok(disks
            .list()
            .iter()
            .map(|disk| disk.mount_point().to_string_lossy().to_string())
            .collect())
    }

    fn read_disk_usage(&mut self, mount_path: &str) -> Result<DiskUsage> {
        platform::mount_usage(Path::new(mount_path))
            .map_err(|e| DashError::provider(format!("disk usage {}", mount_path), e))
    }

    fn read_network(&mut self) -> Result<NetworkCounters> {
        #[cfg(target_os = "linux")]
        {
            match platform::linux::read_network_counters() {
                Ok(counters) => return Ok(counters),
                Err(e) => debug!("/proc/net/dev unavailable, using sysinfo: {}", e),
            }
        }

        let networks = Networks::new_with_refreshed_list();
        if networks.list().is_empty() {
            return Err(DashError::provider_msg("network", "no network interfaces reported"));
        }

        let mut total = NetworkCounters::default();
        for data in networks.list().values() {
            // sysinfo does not expose drop counters
            total.accumulate(&NetworkCounters {
                bytes_sent: data.total_transmitted(),
                bytes_received: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_received: data.total_packets_received(),
                errors_in: data.total_errors_on_received(),
                errors_out: data.total_errors_on_transmitted(),
                drops_in: 0,
                drops_out: 0,
            });
        }
        Ok(total)
    }
}
