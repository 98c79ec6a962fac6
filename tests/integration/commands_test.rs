use std::fs;

use sysdash::commands::{cat, config, list, version};
use sysdash::core::DashboardConfig;
use sysdash::core::listing::scan_directory;
use sysdash::ui::Console;
use tempfile::TempDir;

fn console() -> Console<Vec<u8>> {
    Console::new(Vec::new(), false, 80)
}

fn output(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).unwrap()
}

#[test]
fn test_listing_shows_directories_first_with_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b_notes.md"), "# notes").unwrap();
    fs::write(dir.path().join("a_script.py"), "print()").unwrap();
    fs::create_dir(dir.path().join("zeta")).unwrap();

    let listing = scan_directory(dir.path()).unwrap();
    let mut console = console();
    list::render_listing(&mut console, &listing).unwrap();
    let text = output(console);

    let zeta = text.find("zeta").unwrap();
    let script = text.find("a_script.py").unwrap();
    let notes = text.find("b_notes.md").unwrap();
    assert!(zeta < script && script < notes);

    assert!(text.contains("📁"));
    assert!(text.contains("🐍"));
    assert!(text.contains("7.0B"));
    assert!(text.trim_end().ends_with("1 directories, 2 files"));
}

#[test]
fn test_listing_table_columns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), "{}").unwrap();

    let listing = scan_directory(dir.path()).unwrap();
    let lines = list::listing_table(&listing).lines();
    let header = lines[0].plain_text();

    for column in ["Type", "Name", "Size", "Modified", "Permissions"] {
        assert!(header.contains(column), "missing {} in {:?}", column, header);
    }
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_cat_numbers_lines_in_titled_panel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.rs");
    fs::write(&path, "fn main() {\n\tprintln!(\"hi\");\n}\n").unwrap();

    let mut console = console();
    let failures = cat::show_files(&mut console, &[&path]).unwrap();
    let text = output(console);

    assert_eq!(failures, 0);
    assert!(text.contains("📄 main.rs · rust"));
    assert!(text.lines().any(|l| l.contains("1  fn main() {")));
    assert!(text.lines().any(|l| l.contains("2      println!(\"hi\");")));
}

#[test]
fn test_cat_reports_missing_file_and_continues() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("ok.txt");
    fs::write(&good, "hello").unwrap();
    let missing = dir.path().join("missing.txt");

    let mut console = console();
    let failures = cat::show_files(&mut console, &[&missing, &good]).unwrap();
    let text = output(console);

    assert_eq!(failures, 1);
    assert!(text.contains("does not exist"));
    assert!(text.contains("📄 ok.txt · text"));
    assert!(text.contains("hello"));
}

#[test]
fn test_cat_rejects_directory() {
    let dir = TempDir::new().unwrap();

    let mut console = console();
    let failures = cat::show_files(&mut console, &[dir.path()]).unwrap();

    assert_eq!(failures, 1);
    assert!(output(console).contains("is not a file"));
}

#[test]
fn test_config_show_prints_json_through_console() {
    let mut console = console();
    config::show(&mut console, &DashboardConfig::default()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output(console)).unwrap();
    assert_eq!(value["bar_width"], 20);
    assert_eq!(value["mounts"][2], "/boot");
}

#[test]
fn test_version_line() {
    assert_eq!(
        version::version_line(),
        format!("sysdash version {}", env!("CARGO_PKG_VERSION"))
    );
}
