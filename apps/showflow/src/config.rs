use flow_capture::{ProcessorConfig, SourceSpec};
use std::path::PathBuf;

use crate::Cli;

pub const WINDOW_LABEL: &str = "Optical Flow";
pub const MOCK_WIDTH: u32 = 320;
pub const MOCK_HEIGHT: u32 = 240;

/// Immutable run configuration, derived once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceSpec,
    pub scaledown: u32,
    pub move_step: u32,
    pub window_label: String,
    pub mock: bool,
    pub mock_frames: u64,
    pub headless: bool,
    pub summary_json: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: SourceSpec::resolve(cli.file.clone(), cli.camera),
            scaledown: cli.scaledown,
            move_step: cli.movestep,
            window_label: WINDOW_LABEL.to_string(),
            mock: cli.mock,
            mock_frames: cli.mock_frames,
            headless: cli.headless,
            summary_json: cli.summary_json.clone(),
        }
    }

    /// Arguments for processor construction at the given native size.
    pub fn processor_config(&self, width: u32, height: u32) -> ProcessorConfig {
        ProcessorConfig::new(width, height)
            .with_window_label(self.window_label.clone())
            .with_scaledown(self.scaledown)
            .with_move_step(self.move_step)
    }
}
