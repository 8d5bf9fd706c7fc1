use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

/// Remapping of linear time progress to perceived progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    Sine,
    #[default]
    SineSquared,
    Circular,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::Sine,
        Easing::SineSquared,
        Easing::Circular,
    ];

    /// Map progress in [0, 1] to eased progress in [0, 1].
    /// Input outside the range is clamped first.
    pub fn apply(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::Sine => sine(p),
            Easing::SineSquared => sine(sine(p)),
            Easing::Circular => circular(p),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Sine => "sine",
            Easing::SineSquared => "sine_squared",
            Easing::Circular => "circular",
        }
    }
}

/// Half a sine period, shifted to start at 0 and end at 1
pub fn sine(p: f32) -> f32 {
    let period = p * PI - FRAC_PI_2;
    period.sin() * 0.5 + 0.5
}

/// Two quarter-circle arcs joined at p = 0.5
pub fn circular(p: f32) -> f32 {
    if p <= 0.5 {
        let x = p * 2.0;
        let y = (1.0 - x * x).max(0.0).sqrt();
        (1.0 - y) / 2.0
    } else {
        let x = p * 2.0 - 2.0;
        let y = (1.0 - x * x).max(0.0).sqrt();
        (1.0 + y) / 2.0
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown easing '{}', expected one of: linear, sine, sine_squared, circular",
                    s
                )
            })
    }
}
