//! Point-in-time host telemetry.
//!
//! A [`MetricsCollector`] reads raw samples from the host, and the
//! [`SnapshotAssembler`] turns them into one immutable [`Snapshot`].

mod assembler;
mod collector;
mod types;

pub use assembler::{
    average_usage, uptime_seconds, AssemblyPolicy, SnapshotAssembler, DEFAULT_MOUNTS,
};
pub use collector::{MetricsCollector, SysinfoCollector};
pub use types::*;
