mod config;
mod report;
mod world;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::config::Config;
use crate::world::Mode;

/// List the Debian packages that were installed on purpose.
///
/// Correlates the dpkg status database with apt's extended states: a
/// package counts as manually installed when it is explicitly marked
/// `Auto-Installed: 0` or carries no marking at all.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Show debug diagnostics on stderr, not just warnings
    #[arg(short, long)]
    verbose: bool,

    /// Path to the dpkg status file
    #[arg(long, value_name = "PATH")]
    status_file: Option<PathBuf>,

    /// Path to the apt extended_states file
    #[arg(long, value_name = "PATH")]
    extended_states_file: Option<PathBuf>,

    /// Only list packages explicitly marked manual (Auto-Installed: 0)
    #[arg(long, group = "mode")]
    explicitly_manual: bool,

    /// Drop essential and required/important packages unless explicitly marked manual
    #[arg(long, group = "mode")]
    filter_base: bool,

    /// Render a table with package details instead of plain lines
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn mode(&self) -> Option<Mode> {
        if self.explicitly_manual {
            Some(Mode::ExplicitlyManual)
        } else if self.filter_base {
            Some(Mode::FilterBase)
        } else {
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let verbose = cli.verbose || config.verbose.unwrap_or(false);
    let mode = cli.mode().or(config.mode).unwrap_or_default();
    let status_file = cli
        .status_file
        .or(config.status_file)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_STATUS_FILE));
    let extended_states_file = cli
        .extended_states_file
        .or(config.extended_states_file)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_EXTENDED_STATES_FILE));

    let outcome = world::evaluate(&status_file, &extended_states_file, mode)?;

    report::print_diagnostics(&outcome.diagnostics, verbose);
    if cli.report {
        report::print_report(&outcome.selection);
    } else {
        report::print_packages(&outcome.selection);
    }
    Ok(())
}
