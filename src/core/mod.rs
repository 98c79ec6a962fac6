// Core business logic module

pub mod config;
pub mod listing;
pub mod snapshot;
pub mod viewer;

// Re-export commonly used items
pub use config::DashboardConfig;
pub use listing::{scan_directory, DirectoryListing, EntryKind, ListingEntry};
pub use snapshot::{MetricsCollector, Snapshot, SnapshotAssembler, SysinfoCollector};
pub use viewer::{detect_language, load_source, SourceFile};
