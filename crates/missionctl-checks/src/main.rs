//! MissionCtl Pre-Launch Check Harness
//!
//! Replays a mission scenario against a fresh in-memory ledger and reports
//! which checks pass. Runs entirely in-process: no DB, no networking.
//!
//! Usage:
//!   cargo run -p missionctl-checks
//!   cargo run -p missionctl-checks -- --verbose
//!   cargo run -p missionctl-checks -- --scenario data/mission_scenario.json --json
//!
//! Diagnostics go to stderr and follow `RUST_LOG` (default `warn`).

mod checks;
mod scenario;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::checks::Report;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "missionctl-checks")]
#[command(about = "Run pre-launch mission checks against an in-memory ledger")]
struct Args {
    /// Scenario JSON file (defaults to the built-in pre-launch scenario)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Print details for passing checks too
    #[arg(long)]
    verbose: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin()?,
    };

    let report = checks::run(&scenario);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.verbose);
    }

    if report.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &Report, verbose: bool) {
    println!("=== MissionCtl Pre-Launch Checks: {} ===", report.scenario);
    println!("    mission date {}", report.today);

    let mut section = "";
    for r in &report.results {
        if r.section != section {
            section = r.section;
            println!("\n--- {} ---", section);
        }
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        } else {
            println!("  {} {}", icon, r.name);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        report.passed,
        report.results.len(),
        report.failed
    );
}
