// oldboys: headless driver for the play engine.
//
// Loads a chart and engine config, plays the session at a fixed frame rate
// with autoplay or a scripted input file, and prints the final statistics.

mod input_script;
mod simulation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use oldboys_config::EngineConfig;
use oldboys_model::Lane;
use oldboys_play::{Autoplay, PlayEngine};

#[derive(Parser, Debug)]
#[command(name = "oldboys", about = "Play a chart headlessly and print the score")]
struct Args {
    /// Chart JSON: an array of {lane, tick} records.
    #[arg(long)]
    chart: PathBuf,

    /// Engine config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input script JSON: an array of {tick, lane} presses.
    #[arg(long, conflicts_with = "autoplay")]
    inputs: Option<PathBuf>,

    /// Press every note on time.
    #[arg(long)]
    autoplay: bool,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Stop after this many frames even if the session has not finished.
    #[arg(long)]
    max_frames: Option<u64>,

    /// Log every judgment.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &args.config {
        Some(path) => {
            let c = EngineConfig::read(path)
                .with_context(|| format!("loading engine config {}", path.display()))?;
            info!("Loaded engine config {}", path.display());
            c
        }
        None => EngineConfig::default(),
    };

    let mut engine = PlayEngine::open(&args.chart, config)?;
    let bindings = engine.config().lane_bindings();

    let mut driver = if args.autoplay {
        Autoplay::new(engine.chart(), &bindings)
    } else if let Some(path) = &args.inputs {
        let presses = input_script::read_script(path)?;
        info!("Loaded {} scripted presses from {}", presses.len(), path.display());
        Autoplay::from_presses(presses.iter().map(|p| (p.lane, p.tick)), &bindings)
    } else {
        warn!("No --autoplay or --inputs given, every note will be missed");
        Autoplay::from_presses(Vec::<(Lane, f64)>::new(), &bindings)
    };

    let max_frames = args
        .max_frames
        .unwrap_or_else(|| simulation::frame_cap(&engine, args.fps));
    let summary = simulation::run(&mut engine, &mut driver, args.fps, max_frames);
    if !summary.finished {
        warn!("Stopped after {} frames before the session finished", summary.frames);
    }

    let stats = engine.export_statistics();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
