//! showflow: optical-flow demo with throughput reporting
//!
//! ```text
//! showflow               # video from webcam
//! showflow -f FILENAME   # video from file
//! showflow -c CAMERA     # specific camera number
//! showflow -s N          # scale-down factor for flow image
//! showflow -m M          # move step in pixels
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use flow_capture::{run_capture, FrameProcessor, HeadlessProcessor, RunStats, VideoSource};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "showflow", version, about = "Optical-flow demonstration")]
pub struct Cli {
    /// Read from video file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Integer scale-down factor for the flow image
    #[arg(
        short = 's',
        long,
        value_name = "SCALEDOWN",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    scaledown: u32,

    /// Camera number
    #[arg(short = 'c', long, value_name = "CAMERA", default_value_t = 0)]
    camera: i32,

    /// Move step (pixels)
    #[arg(
        short = 'm',
        long,
        value_name = "MOVESTEP",
        default_value_t = 16,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    movestep: u32,

    /// Use the synthetic source instead of a real device
    #[arg(long, action = ArgAction::SetTrue)]
    mock: bool,

    /// Frames the synthetic source yields before ending
    #[arg(long, default_value_t = 300u64)]
    mock_frames: u64,

    /// Skip the display window and only measure throughput
    #[arg(long, action = ArgAction::SetTrue)]
    headless: bool,

    /// Also write the run statistics as JSON to this path
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let stats = run(&config)?;
    println!("{stats}");

    if let Some(path) = &config.summary_json {
        write_summary(path, &stats)?;
        info!(path = %path.display(), "wrote summary");
    }
    Ok(())
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run(config: &Config) -> Result<RunStats> {
    if config.mock {
        let mut source = flow_capture::MockSource::new(config::MOCK_WIDTH, config::MOCK_HEIGHT)
            .with_limit(config.mock_frames);
        return measure(&mut source, config);
    }
    run_device(config)
}

#[cfg(feature = "opencv")]
fn run_device(config: &Config) -> Result<RunStats> {
    let mut source = flow_capture::OpenCvSource::open(&config.source)
        .map_err(|e| anyhow::anyhow!("opencv open failed: {e}"))?;
    measure(&mut source, config)
}

#[cfg(not(feature = "opencv"))]
fn run_device(config: &Config) -> Result<RunStats> {
    anyhow::bail!(
        "cannot open {}: no capture backend compiled in (build with --features opencv, or pass --mock)",
        config.source
    )
}

fn measure<S: VideoSource>(source: &mut S, config: &Config) -> Result<RunStats> {
    let (width, height) = source.frame_size();
    info!(source = %config.source, width, height, "capturing");
    let mut processor = make_processor(config, width, height)?;
    Ok(run_capture(source, &mut processor, config.scaledown))
}

fn make_processor(config: &Config, width: u32, height: u32) -> Result<Box<dyn FrameProcessor>> {
    let pc = config.processor_config(width, height);
    if config.headless {
        return Ok(Box::new(HeadlessProcessor::new(pc)));
    }
    #[cfg(feature = "opencv")]
    {
        let window = flow_capture::flow_window::FlowWindow::new(pc)
            .map_err(|e| anyhow::anyhow!("opencv window failed: {e}"))?;
        Ok(Box::new(window))
    }
    #[cfg(not(feature = "opencv"))]
    {
        info!("display backend not enabled at compile time; running headless");
        Ok(Box::new(HeadlessProcessor::new(pc)))
    }
}

fn write_summary(path: &Path, stats: &RunStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
