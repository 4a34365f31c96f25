//! Martian Robots CLI
//!
//! Reads a mission file (or stdin) and prints each robot's final position.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use martian_robots::{MissionReport, ParseConfig, parse_mission};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One `x y O [LOST]` line per robot.
    Text,
    /// Final positions and scents as JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "martian-robots")]
#[command(about = "Simulate robots on a scent-marked Martian grid")]
struct Args {
    /// Mission file to read. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject grid bounds or robot coordinates above this value.
    #[arg(long)]
    max_coordinate: Option<u32>,

    /// Reject instruction lines longer than this.
    #[arg(long)]
    max_instructions: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn parse_config(&self) -> ParseConfig {
        ParseConfig {
            max_coordinate: self.max_coordinate,
            max_instructions: self.max_instructions,
        }
    }
}

/// Reads the mission from `path`, falling back to `stdin` when it is absent or `-`.
fn read_input(path: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render(report: &MissionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Reads, parses and runs a mission, returning the rendered report.
fn run(args: &Args, stdin: impl Read) -> Result<String> {
    let input = read_input(args.input.as_deref(), stdin)?;
    let mission = parse_mission(&input, &args.parse_config()).context("invalid mission input")?;
    info!(robots = mission.robots.len(), grid = %mission.grid, "running mission");

    let report = mission.run();
    render(&report, args.format)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let output = run(&args, std::io::stdin().lock())?;
    println!("{output}");

    Ok(())
}
