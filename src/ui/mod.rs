// UI and formatting module

pub mod dashboard;
pub mod formatters;
pub mod gauge;
pub mod panel;
pub mod style;

// Re-export commonly used items for cleaner imports
pub use dashboard::DashboardRenderer;
pub use formatters::{format_bytes, format_count, format_permissions, format_size, format_time};
pub use gauge::{classify, render_bar, Severity, Thresholds};
pub use panel::{Column, Console, Justify, Panel, Table};
pub use style::{Style, StyledText};
