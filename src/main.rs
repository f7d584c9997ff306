//! Pipeline Simulator CLI.
//!
//! The main executable. It handles command-line argument parsing, loads the
//! optional configuration file, validates the program, and prints the time
//! diagram.
//!
//! # Usage
//!
//! ```text
//! pipeline-sim input.txt
//! pipeline-sim --config configs/default.toml --format json --stats input.txt
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use pipeline_sim::config::{Config, ReportFormat};
use pipeline_sim::core::pipeline::hazards::HazardPolicy;
use pipeline_sim::sim::{report, Simulator};

/// Command-line arguments for the pipeline simulator.
///
/// Flags given here override the corresponding configuration file values.
#[derive(Parser, Debug)]
#[command(author, version, about = "Five-stage pipeline time diagram simulator")]
struct Args {
    /// Program file, one `opcode rd, rs1, rs2` instruction per line.
    input: PathBuf,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    #[arg(long, value_enum)]
    hazard_policy: Option<HazardPolicy>,

    #[arg(long)]
    max_instructions: Option<usize>,

    /// Print statistics after the diagram.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8, trace: bool) {
    let level = if trace || verbose >= 2 {
        LevelFilter::Trace
    } else if verbose == 1 {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(format) = args.format {
        config.report.format = format;
    }
    if let Some(policy) = args.hazard_policy {
        config.scheduler.hazard_policy = policy;
    }
    if let Some(max) = args.max_instructions {
        config.general.max_instructions = max;
    }
    if args.stats {
        config.report.show_stats = true;
    }

    Ok(config)
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let simulator = Simulator::new(config);
    let result = simulator.run_file(&args.input)?;

    match config.report.format {
        ReportFormat::Text => {
            println!(
                "{}",
                report::render_text(&result.instructions, &config.report.end_marker)
            );
            if config.report.show_stats {
                result.stats.print();
            }
        }
        ReportFormat::Json => {
            let json = report::render_json(&result.instructions, &result.stats)
                .context("failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Main entry point for the pipeline simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and the optional TOML file.
/// 2. **Validation**: Reads and validates the program; on failure, reports the
///    error and exits with status 1 without scheduling anything.
/// 3. **Scheduling**: Builds the per-instruction schedules.
/// 4. **Report**: Prints the time diagram (and statistics, if requested).
fn main() {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    init_logging(args.verbose, config.general.trace);

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
