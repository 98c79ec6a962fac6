use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use log::warn;
use std::io::{self, Write};

use sysdash::commands;

const INTERRUPTED_EXIT_CODE: i32 = 130;

fn build_cli() -> Command {
    Command::new("sysdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("One-shot system status dashboard for the terminal")
        .long_about(
            "Samples CPU, memory, swap, disk, network and uptime once and prints \
             color-coded panels. Run without a subcommand to show the dashboard.",
        )
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("MS")
                .help("CPU sampling window in milliseconds")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("bar-width")
                .short('w')
                .long("bar-width")
                .value_name("N")
                .help("Number of glyphs in each usage bar")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("mounts")
                .short('m')
                .long("mounts")
                .value_name("PATH,...")
                .help("Mount points to show in the disk panel")
                .value_delimiter(','),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the snapshot as JSON instead of panels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-clear")
                .long("no-clear")
                .help("Do not clear the screen before rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("ls")
                .about("List a directory with icons, sizes and permissions")
                .arg(
                    Arg::new("path")
                        .help("Directory to list")
                        .default_value(".")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("cat")
                .about("Show files in panels with line numbers")
                .arg(
                    Arg::new("files")
                        .help("Files to display")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the config file")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(
                    Command::new("init").about("Write a default config file").arg(
                        Arg::new("force")
                            .short('f')
                            .long("force")
                            .help("Overwrite an existing config file")
                            .action(ArgAction::SetTrue),
                    ),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let _ = writeln!(io::stdout(), "\n{}", "Dashboard closed".yellow());
        std::process::exit(INTERRUPTED_EXIT_CODE);
    });

    if let Err(e) = result {
        warn!("Could not install Ctrl+C handler: {}", e);
    }
}

fn runs_dashboard(matches: &ArgMatches) -> bool {
    matches.subcommand().is_none()
}

fn run() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    // Only the dashboard announces an interrupt; ls and cat keep the default
    if runs_dashboard(&matches) {
        install_interrupt_handler();
    }

    match matches.subcommand() {
        Some(("ls", sub_matches)) => commands::list(sub_matches),
        Some(("cat", sub_matches)) => commands::cat(sub_matches),
        Some(("config", sub_matches)) => commands::config(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::status(&matches),
    }
}

fn main() {
    sysdash::init_logging();

    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
