use std::io::{self, Write};

use super::fixtures::*;
use sysdash::core::snapshot::SnapshotAssembler;
use sysdash::ui::{Console, DashboardRenderer, Thresholds};
use sysdash::DashError;

/// A sink whose reader has gone away
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

fn render_plain(collector: StaticCollector) -> String {
    let snapshot = SnapshotAssembler::new(collector).assemble().unwrap();
    let mut renderer = DashboardRenderer::new(Console::new(Vec::new(), false, 80));
    renderer.render(&snapshot).unwrap();
    String::from_utf8(renderer.into_console().into_inner()).unwrap()
}

fn position(output: &str, needle: &str) -> usize {
    output
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} missing from output:\n{}", needle, output))
}

#[test]
fn test_panels_render_in_fixed_order() {
    let output = render_plain(StaticCollector::new());

    let order = [
        "System Status Dashboard",
        "System Information",
        "CPU Information",
        "Memory Information",
        "Disk Usage",
        "Network Statistics",
    ];
    let positions: Vec<usize> = order.iter().map(|t| position(&output, t)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let output = render_plain(StaticCollector::new());
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn test_system_rows() {
    let output = render_plain(StaticCollector::new());

    assert!(output.contains("Linux 6.1.0"));
    assert!(output.contains("testbox"));
    assert!(output.contains("Test CPU 3000"));
    assert!(output.contains("2024-01-01 08:00:00"));
}

#[test]
fn test_missing_processor_shows_unknown() {
    let mut collector = StaticCollector::new();
    collector.processor = None;
    let output = render_plain(collector);

    let processor_line = output
        .lines()
        .find(|l| l.contains("Processor"))
        .unwrap();
    assert!(processor_line.contains("Unknown"));
}

#[test]
fn test_cpu_rows_end_with_average() {
    let output = render_plain(StaticCollector::new());

    assert!(output.contains("2400.00 MHz"));
    assert!(output.contains("Core 0"));
    assert!(output.contains("Core 2"));
    // 20% of a 20-glyph bar
    assert!(output.contains("████░░░░░░░░░░░░░░░░ 20.0%"));
    assert!(position(&output, "Core 2") < position(&output, "Average"));
    assert!(position(&output, "Average") < position(&output, "Memory Information"));
}

#[test]
fn test_memory_and_network_values() {
    let output = render_plain(StaticCollector::new());

    assert!(output.contains("8.00GB"));
    assert!(output.contains("4.00GB (50.0%)"));
    assert!(output.contains("0.00B"));
    assert!(output.contains("2.00KB"));
    assert!(output.contains("1.00MB"));
    assert!(output.contains("1,234,567"));
    assert!(output.lines().any(|l| l.contains("Drop Out") && l.contains('4')));
}

#[test]
fn test_every_panel_line_fits_console_width() {
    let snapshot = sample_snapshot();
    let renderer = DashboardRenderer::new(Console::new(Vec::new(), false, 100))
        .with_bar_width(10)
        .with_thresholds(Thresholds {
            warning: 10.0,
            critical: 25.0,
        });

    for panel in renderer.panels(&snapshot) {
        let lines = panel.lines(100);
        let first = lines[0].width();
        assert!(lines.iter().all(|l| l.width() == first));
    }
}

#[test]
fn test_empty_disk_list_still_renders_panel() {
    let mut collector = StaticCollector::new();
    collector.partitions.clear();
    let output = render_plain(collector);

    assert!(output.contains("Disk Usage"));
    assert!(output.contains("Mount"));
}

#[test]
fn test_closed_sink_is_rendering_failure() {
    let mut renderer = DashboardRenderer::new(Console::new(ClosedPipe, false, 80));
    let err = renderer.render(&sample_snapshot()).unwrap_err();

    match err {
        DashError::RenderingFailure(source) => {
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe)
        }
        other => panic!("expected RenderingFailure, got {:?}", other),
    }
}

#[test]
fn test_closed_sink_fails_json_output() {
    let mut console = Console::new(ClosedPipe, false, 80);
    let err = console.print_json(&sample_snapshot()).unwrap_err();

    match err {
        DashError::RenderingFailure(source) => {
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe)
        }
        other => panic!("expected RenderingFailure, got {:?}", other),
    }
}

#[test]
fn test_json_output_is_parseable_snapshot() {
    let mut console = Console::new(Vec::new(), false, 80);
    console.print_json(&sample_snapshot()).unwrap();
    let text = String::from_utf8(console.into_inner()).unwrap();

    assert!(text.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["cpu"]["average_usage"], 20.0);
}
