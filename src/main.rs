//! reslot - replay a drag scenario and print per-item displacements.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Compute drag-reorder displacements for a scenario file
#[derive(Parser, Debug)]
#[command(name = "reslot")]
#[command(version)]
#[command(about = "Compute drag-reorder displacements for a TOML scenario file")]
struct Args {
    /// Path to a TOML scenario file
    scenario: PathBuf,

    /// Override the scenario's drag delta (pixels)
    #[arg(short, long)]
    delta: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    reslot::logging::init()?;

    let mut scenario = reslot::scenario::Scenario::from_path(&args.scenario)?;
    if let Some(delta) = args.delta {
        scenario.delta = delta;
    }
    info!(name = %scenario.name, delta = scenario.delta, "replaying scenario");

    let outcome = scenario.run()?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{json}");
    Ok(())
}
