// Linux-specific readers: /proc/net/dev counters and cpufreq bounds.

use crate::core::snapshot::NetworkCounters;

/// Parse the contents of `/proc/net/dev` into one aggregate over all interfaces.
///
/// Returns a description of the first malformed interface line on failure.
pub fn parse_proc_net_dev(content: &str) -> Result<NetworkCounters, String> {
    let mut total = NetworkCounters::default();

    for line in content.lines() {
        let Some((iface, stats)) = line.split_once(':') else {
            continue;
        };

        let fields: Vec<u64> = stats
            .split_whitespace()
            .map(|f| f.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|e| format!("bad counter for interface '{}': {}", iface.trim(), e))?;

        if fields.len() < 16 {
            return Err(format!(
                "interface '{}' has {} counters, expected 16",
                iface.trim(),
                fields.len()
            ));
        }

        total.accumulate(&NetworkCounters {
            bytes_received: fields[0],
            packets_received: fields[1],
            errors_in: fields[2],
            drops_in: fields[3],
            bytes_sent: fields[8],
            packets_sent: fields[9],
            errors_out: fields[10],
            drops_out: fields[11],
        });
    }

    Ok(total)
}

/// Read aggregate interface counters from /proc/net/dev.
pub fn read_network_counters() -> std::io::Result<NetworkCounters> {
    let content = std::fs::read_to_string("/proc/net/dev")?;
    parse_proc_net_dev(&content).map_err(std::io::Error::other)
}

/// Average scaling min/max frequency (MHz) over the given cores, from sysfs.
pub fn read_cpufreq_bounds(core_count: usize) -> Option<(f64, f64)> {
    let read_khz = |path: String| -> Option<f64> {
        std::fs::read_to_string(path).ok()?.trim().parse::<f64>().ok()
    };

    let mut mins = Vec::new();
    let mut maxs = Vec::new();
    for core in 0..core_count {
        let base = format!("/sys/devices/system/cpu/cpu{}/cpufreq", core);
        if let (Some(min), Some(max)) = (
            read_khz(format!("{}/scaling_min_freq", base)),
            read_khz(format!("{}/scaling_max_freq", base)),
        ) {
            mins.push(min / 1000.0);
            maxs.push(max / 1000.0);
        }
    }

    if mins.is_empty() {
        return None;
    }
    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
    Some((mean(&mins), mean(&maxs)))
}
