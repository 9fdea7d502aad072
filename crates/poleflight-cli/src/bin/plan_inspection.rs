//! Generate a pole inspection mission from a pole file and a photo file.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use poleflight_cli::{init_tracing, load_config, read_record_file, write_output};
use poleflight_core::{InspectionSession, MissionExport, ParseOptions};

/// Plan a photo inspection mission over a list of poles
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Pole file: id,latitude,longitude,altitude per line
    #[arg(long)]
    poles: PathBuf,

    /// Photo file: poleId,relLat,relLon,relAlt,cameraTilt per line
    #[arg(long)]
    photos: PathBuf,

    /// Planner configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Both files start with a header row
    #[arg(long, default_value_t = false)]
    header: bool,

    /// Write the mission JSON here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing("poleflight_core=info")?;
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let mut session = InspectionSession::new(config)
        .with_parse_options(ParseOptions { has_header: args.header });

    let report = session.load_poles(&read_record_file(&args.poles)?)?;
    eprintln!("{report}");
    let report = session.load_photos(&read_record_file(&args.photos)?)?;
    eprintln!("{report}");

    let report = session.generate()?;
    eprintln!("{report}");

    let Some(mission) = session.mission() else {
        bail!("no waypoints generated, check that pole ids match between the two files");
    };

    let export = MissionExport::from_report(mission.clone(), &report);
    write_output(args.output.as_deref(), &export.to_json_pretty()?)?;

    Ok(())
}
