// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::easing::Easing;

/// Scripted camera sequence run by the demo
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Single eased view transition
    View,
    /// Two view transitions issued back to back
    Chain,
    /// Two queued zooms
    Zoom,
    /// Queued zoom interrupted by a zero-duration zoom
    HardZoom,
    /// Continuous rotation stopped after the duration
    Rotate,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "view-animator")]
#[command(about = "Headless camera transition demo", long_about = None)]
pub struct Cli {
    /// JSON scene config; defaults are used for missing fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Scenario::Chain)]
    pub scenario: Scenario,

    /// Duration of each transition in milliseconds
    #[arg(long = "duration-ms", default_value_t = 1000)]
    pub duration_ms: u64,

    /// Easing override (linear, sine, sine_squared, circular)
    #[arg(long)]
    pub easing: Option<Easing>,

    /// Zoom distance in scene units
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub distance: f32,

    /// Stop after this many frames even if work is pending
    #[arg(long = "max-frames", default_value_t = 600)]
    pub max_frames: u64,

    /// Skip the per-frame pose lines
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}
