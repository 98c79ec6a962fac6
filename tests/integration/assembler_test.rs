use super::fixtures::*;
use sysdash::core::snapshot::{AssemblyPolicy, SnapshotAssembler};
use sysdash::DashError;

fn policy(mounts: &[&str]) -> AssemblyPolicy {
    AssemblyPolicy {
        mount_allow_list: mounts.iter().map(|m| m.to_string()).collect(),
    }
}

#[test]
fn test_reads_happen_in_category_order() {
    let mut assembler = SnapshotAssembler::new(StaticCollector::new());
    assembler.assemble().unwrap();

    assert_eq!(
        assembler.collector().calls,
        ["identity", "cpu", "memory", "swap", "partitions", "disk /", "network"]
    );
}

#[test]
fn test_disks_follow_partition_order_and_allow_list() {
    let collector = StaticCollector::new()
        .with_mount("/mnt/usb", MountOutcome::Usage(disk(500, 100)))
        .with_mount("/home", MountOutcome::Usage(disk(2000, 1500)));

    let snapshot = SnapshotAssembler::with_policy(collector, policy(&["/home", "/"]))
        .assemble()
        .unwrap();

    let mounts: Vec<&str> = snapshot.disks.iter().map(|d| d.mount_path.as_str()).collect();
    assert_eq!(mounts, ["/", "/home"]);
    assert_eq!(snapshot.disks[1].usage_percent, 75.0);
    assert_eq!(snapshot.disks[1].free_bytes, 500);
}

#[test]
fn test_excluded_mount_is_never_queried() {
    let collector = StaticCollector::new().with_mount("/mnt/usb", MountOutcome::Fails);
    let mut assembler = SnapshotAssembler::new(collector);
    assembler.assemble().unwrap();
    assert!(!assembler.collector().calls.iter().any(|c| c == "disk /mnt/usb"));
}

#[test]
fn test_permission_denied_partition_is_skipped() {
    let collector = StaticCollector::new()
        .with_mount("/boot", MountOutcome::PermissionDenied)
        .with_mount("/home", MountOutcome::Usage(disk(100, 10)));

    let snapshot = SnapshotAssembler::new(collector).assemble().unwrap();

    let mounts: Vec<&str> = snapshot.disks.iter().map(|d| d.mount_path.as_str()).collect();
    assert_eq!(mounts, ["/", "/home"]);
}

#[test]
fn test_other_disk_failure_aborts_assembly() {
    let collector = StaticCollector::new().with_mount("/home", MountOutcome::Fails);
    let err = SnapshotAssembler::new(collector).assemble().unwrap_err();

    assert!(matches!(err, DashError::ProviderUnavailable { .. }));
    assert!(err.to_string().contains("disk usage /home"));
}

#[test]
fn test_memory_failure_aborts_before_later_reads() {
    let mut collector = StaticCollector::new();
    collector.memory_fails = true;

    let mut assembler = SnapshotAssembler::new(collector);
    let result = assembler.assemble();
    assert!(matches!(result, Err(DashError::ProviderUnavailable { .. })));
    assert_eq!(
        assembler.collector().calls.last().map(String::as_str),
        Some("memory")
    );
}

#[test]
fn test_no_cores_is_an_error() {
    let mut collector = StaticCollector::new();
    collector.cores.clear();

    let result = SnapshotAssembler::new(collector).assemble();
    assert!(matches!(result, Err(DashError::NoCoresReported)));
}

#[test]
fn test_derived_values() {
    let snapshot = sample_snapshot();

    assert_eq!(snapshot.cpu.average_usage, 20.0);
    assert_eq!(snapshot.cpu.cores.len(), 3);
    assert_eq!(snapshot.cpu.cores[2].core_index, 2);
    assert!(snapshot.taken_at >= snapshot.boot_time);
    assert_eq!(
        snapshot.uptime_secs,
        (snapshot.taken_at - snapshot.boot_time).num_seconds() as u64
    );
}

#[test]
fn test_snapshot_serializes_to_json() {
    let value = serde_json::to_value(sample_snapshot()).unwrap();

    assert_eq!(value["identity"]["hostname"], "testbox");
    assert_eq!(value["disks"][0]["mount_path"], "/");
    assert_eq!(value["network"]["drops_out"], 4);
}
