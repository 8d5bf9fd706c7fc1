use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::frame_loop::FALLBACK_HZ;
use crate::easing::Easing;
use crate::types::WIDTH_TOLERANCE;

/// Degrees turned per frame by continuous rotation
pub const ROTATION_STEP_DEGREES: f32 = 0.2;

/// Frame pacing strategy, resolved once when the frame loop is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameLoopConfig {
    /// Host drives ticks from its presentation loop
    pub host_vsync: bool,
    /// Timer rate used when the host cannot drive ticks
    pub fallback_hz: f32,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            host_vsync: false,
            fallback_hz: FALLBACK_HZ,
        }
    }
}

/// Tunables for the animation engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Easing used by `animate_view_to_default`
    pub default_easing: Easing,
    pub rotation_step_degrees: f32,
    /// Width difference under which two poses count as equal
    pub width_tolerance: f32,
    pub frame_loop: FrameLoopConfig,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            default_easing: Easing::SineSquared,
            rotation_step_degrees: ROTATION_STEP_DEGREES,
            width_tolerance: WIDTH_TOLERANCE,
            frame_loop: FrameLoopConfig::default(),
        }
    }
}

/// Initial state of the demo viewer camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub translation: [f32; 3],
    pub width: f32,
    pub field_of_view_degrees: f32,
    pub units_per_meter: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            translation: [0.0, 0.0, -10.0],
            width: 10.0,
            field_of_view_degrees: 45.0,
            units_per_meter: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub animator: AnimatorConfig,
    pub camera: CameraConfig,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scene config")
    }
}

/// Load a JSON scene config; missing fields take their defaults
pub fn load_config(path: impl AsRef<Path>) -> Result<SceneConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = SceneConfig::from_json(&json)
        .with_context(|| format!("Invalid config file: {:?}", path))?;
    log::info!("Loaded config from {:?}", path);
    Ok(config)
}
