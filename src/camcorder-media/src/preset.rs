//! Capture presets
//!
//! A preset decouples the capture rate from the playback frame rate.
//! Capturing faster than playback gives slow motion, slower gives time-lapse.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CapturePreset {
    UltraSlowMo,
    SlowMo,
    /// Capture rate equals frame rate. Any unrecognized name maps here.
    #[default]
    Normal,
    TimeLapse,
    UltraTimeLapse,
}

impl CapturePreset {
    pub fn all() -> &'static [CapturePreset] {
        &[
            CapturePreset::UltraSlowMo,
            CapturePreset::SlowMo,
            CapturePreset::Normal,
            CapturePreset::TimeLapse,
            CapturePreset::UltraTimeLapse,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CapturePreset::UltraSlowMo => "ultraslowmo",
            CapturePreset::SlowMo => "slowmo",
            CapturePreset::Normal => "normal",
            CapturePreset::TimeLapse => "timelapse",
            CapturePreset::UltraTimeLapse => "ultratimelapse",
        }
    }

    /// Divisor applied to the frame rate to get the capture rate
    pub fn factor(&self) -> f64 {
        match self {
            CapturePreset::UltraSlowMo => 0.25,
            CapturePreset::SlowMo => 0.5,
            CapturePreset::Normal => 1.0,
            CapturePreset::TimeLapse => 3.0,
            CapturePreset::UltraTimeLapse => 6.0,
        }
    }

    /// Capture rate in frames per second for a playback frame rate
    pub fn capture_rate(&self, frame_rate: u32) -> f64 {
        f64::from(frame_rate) / self.factor()
    }

    /// Resolve a preset name. Names match exactly; anything else is `Normal`.
    pub fn from_name(name: &str) -> Self {
        CapturePreset::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == name)
            .unwrap_or(CapturePreset::Normal)
    }
}

impl fmt::Display for CapturePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapturePreset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for CapturePreset {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for CapturePreset {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CapturePreset> for String {
    fn from(preset: CapturePreset) -> Self {
        preset.as_str().to_string()
    }
}
