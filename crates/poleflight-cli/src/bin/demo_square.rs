//! Build the four-corner demo mission around a location.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use poleflight_cli::{init_tracing, load_config, write_output};
use poleflight_core::{add_demo_stay, square_demo_mission, MissionExport};

/// Generate a small square demo mission
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Center latitude (default: UCI)
    #[arg(long, default_value_t = 33.6846, allow_negative_numbers = true)]
    lat: f64,

    /// Center longitude (default: UCI)
    #[arg(long, default_value_t = -117.8265, allow_negative_numbers = true)]
    lon: f64,

    /// Hover 2 s at the second waypoint
    #[arg(long, default_value_t = false)]
    stay: bool,

    /// Planner configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the mission JSON here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing("poleflight_cli=info")?;
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let mut mission = square_demo_mission(args.lat, args.lon, config.mission);
    if args.stay {
        add_demo_stay(&mut mission)?;
        tracing::info!("aircraft will stay 2000 ms at the second waypoint");
    }

    let export = MissionExport::new(mission, 0, 0);
    write_output(args.output.as_deref(), &export.to_json_pretty()?)?;

    Ok(())
}
