//! Snapshot → panels.
//!
//! Panels come out in a fixed order: header, system identity, CPU, memory
//! (RAM and swap), disk, network.

use std::io::Write;

use colored::Color;

use crate::core::snapshot::Snapshot;
use crate::error::Result;

use super::formatters::{format_bytes, format_count, format_timestamp, format_uptime};
use super::gauge::{render_bar, Thresholds, DEFAULT_BAR_WIDTH};
use super::panel::{Column, Console, Panel, Table};
use super::style::{Style, StyledText};

const UNKNOWN: &str = "Unknown";

/// Renders a [`Snapshot`] as titled panels on a console
pub struct DashboardRenderer<W: Write> {
    console: Console<W>,
    bar_width: usize,
    thresholds: Thresholds,
}

impl<W: Write> DashboardRenderer<W> {
    pub fn new(console: Console<W>) -> Self {
        Self {
            console,
            bar_width: DEFAULT_BAR_WIDTH,
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Print every panel for the snapshot
    pub fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        for panel in self.panels(snapshot) {
            self.console.print_panel(&panel)?;
        }
        self.console.flush()
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Build the panels without printing them
    pub fn panels(&self, snapshot: &Snapshot) -> Vec<Panel> {
        vec![
            header_panel(snapshot),
            system_panel(snapshot),
            self.cpu_panel(snapshot),
            self.memory_panel(snapshot),
            self.disk_panel(snapshot),
            network_panel(snapshot),
        ]
    }

    fn bar(&self, percent: f32) -> StyledText {
        render_bar(percent, self.bar_width, &self.thresholds)
    }

    fn cpu_panel(&self, snapshot: &Snapshot) -> Panel {
        let cpu = &snapshot.cpu;
        let mut table = key_value_table("Metric", "Value");

        table.add_row([
            "Physical Cores".to_string(),
            cpu.physical_cores
                .map(|n| n.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        ]);
        table.add_row(["Total Cores".to_string(), cpu.logical_cores.to_string()]);
        table.add_row(["Current Frequency".to_string(), mhz(cpu.frequency.current_mhz)]);
        table.add_row(["Min Frequency".to_string(), mhz(cpu.frequency.min_mhz)]);
        table.add_row(["Max Frequency".to_string(), mhz(cpu.frequency.max_mhz)]);

        for core in &cpu.cores {
            table.add_row([
                StyledText::plain(format!("Core {}", core.core_index)),
                self.bar(core.usage),
            ]);
        }
        table.add_row([StyledText::plain("Average"), self.bar(cpu.average_usage)]);

        Panel::new("⚡ CPU Information", Style::fg(Color::Yellow), table)
    }

    fn memory_panel(&self, snapshot: &Snapshot) -> Panel {
        let mem = &snapshot.memory;
        let swap = &snapshot.swap;
        let mut table = key_value_table("Type", "Usage");

        table.add_row(["RAM Total".to_string(), format_bytes(mem.total_bytes)]);
        table.add_row([
            "RAM Used".to_string(),
            format!("{} ({:.1}%)", format_bytes(mem.used_bytes), mem.usage_percent),
        ]);
        table.add_row(["RAM Available".to_string(), format_bytes(mem.available_bytes)]);
        table.add_row([StyledText::plain("RAM"), self.bar(mem.usage_percent)]);

        table.add_row(["", ""]);

        table.add_row(["Swap Total".to_string(), format_bytes(swap.total_bytes)]);
        table.add_row([
            "Swap Used".to_string(),
            format!("{} ({:.1}%)", format_bytes(swap.used_bytes), swap.usage_percent),
        ]);
        table.add_row(["Swap Free".to_string(), format_bytes(swap.free_bytes)]);
        table.add_row([StyledText::plain("Swap"), self.bar(swap.usage_percent)]);

        Panel::new("💾 Memory Information", Style::fg(Color::Green), table)
    }

    fn disk_panel(&self, snapshot: &Snapshot) -> Panel {
        let mut table = Table::with_columns(vec![
            Column::new("Mount", Style::fg(Color::Cyan)),
            Column::new("Total", Style::fg(Color::White)).right(),
            Column::new("Used", Style::fg(Color::Yellow)).right(),
            Column::new("Free", Style::fg(Color::Green)).right(),
            Column::new("Usage", Style::fg(Color::White)),
        ]);

        for disk in &snapshot.disks {
            table.add_row([
                StyledText::plain(disk.mount_path.clone()),
                StyledText::plain(format_bytes(disk.total_bytes)),
                StyledText::plain(format_bytes(disk.used_bytes)),
                StyledText::plain(format_bytes(disk.free_bytes)),
                self.bar(disk.usage_percent),
            ]);
        }

        Panel::new("💿 Disk Usage", Style::fg(Color::Magenta), table)
    }
}

fn key_value_table(key: &str, value: &str) -> Table {
    Table::grid(vec![
        Column::new(key, Style::fg(Color::Cyan)),
        Column::new(value, Style::fg(Color::White)),
    ])
}

fn mhz(value: f64) -> String {
    format!("{:.2} MHz", value)
}

fn header_panel(snapshot: &Snapshot) -> Panel {
    let mut table = Table::grid(vec![Column::new("", Style::PLAIN)]);
    table.add_row([StyledText::new(
        "System Status Dashboard",
        Style::fg(Color::Cyan).bold(),
    )]);
    table.add_row([StyledText::new(
        format_timestamp(&snapshot.taken_at),
        Style::PLAIN.dim(),
    )]);

    Panel::untitled(Style::fg(Color::Blue), table).fit()
}

fn system_panel(snapshot: &Snapshot) -> Panel {
    let id = &snapshot.identity;
    let mut table = key_value_table("Key", "Value");

    table.add_row([
        "System".to_string(),
        format!("{} {}", id.os_name, id.os_release),
    ]);
    table.add_row(["Node".to_string(), id.hostname.clone()]);
    table.add_row(["Machine".to_string(), id.machine.clone()]);
    table.add_row([
        "Processor".to_string(),
        id.processor.clone().unwrap_or_else(|| UNKNOWN.to_string()),
    ]);
    table.add_row(["Boot Time".to_string(), format_timestamp(&snapshot.boot_time)]);
    table.add_row(["Uptime".to_string(), format_uptime(snapshot.uptime_secs)]);

    Panel::new("🖥️  System Information", Style::fg(Color::Blue), table)
}

fn network_panel(snapshot: &Snapshot) -> Panel {
    let net = &snapshot.network;
    let mut table = key_value_table("Metric", "Value");

    table.add_row(["Bytes Sent".to_string(), format_bytes(net.bytes_sent)]);
    table.add_row(["Bytes Received".to_string(), format_bytes(net.bytes_received)]);
    table.add_row(["Packets Sent".to_string(), format_count(net.packets_sent)]);
    table.add_row(["Packets Received".to_string(), format_count(net.packets_received)]);
    table.add_row(["Errors In".to_string(), net.errors_in.to_string()]);
    table.add_row(["Errors Out".to_string(), net.errors_out.to_string()]);
    table.add_row(["Drop In".to_string(), net.drops_in.to_string()]);
    table.add_row(["Drop Out".to_string(), net.drops_out.to_string()]);

    Panel::new("🌐 Network Statistics", Style::fg(Color::Cyan), table)
}
