//! Configuration management
//!
//! TOML configuration with named profiles that override the base
//! `[recording]` section.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use camcorder_media::{CaptureProfile, CapturePreset, Quality};

const CONFIG_FILE: &str = "config.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub recording: RecordingConfig,

    /// Named profiles that can override recording settings
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory for recordings (defaults to <videos>/Camcorder)
    pub output_dir: Option<PathBuf>,

    /// FFmpeg executable (defaults to `ffmpeg` on PATH)
    pub ffmpeg: Option<PathBuf>,
}

/// Recording settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Stock quality level
    #[serde(default)]
    pub quality: Quality,

    /// Capture preset name; unknown names record at normal speed
    #[serde(default)]
    pub preset: CapturePreset,

    /// Record microphone audio
    #[serde(default)]
    pub audio: bool,

    /// Orientation hint in degrees
    #[serde(default)]
    pub orientation: i32,

    /// Recording length in seconds
    #[serde(default = "default_duration")]
    pub duration_secs: u64,

    /// Explicit encoding parameters, replacing the quality's stock profile
    pub encoding: Option<CaptureProfile>,
}

/// Profile for overriding recording settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub quality: Option<Quality>,
    pub preset: Option<CapturePreset>,
    pub audio: Option<bool>,
    pub orientation: Option<i32>,
    pub duration_secs: Option<u64>,
    pub encoding: Option<CaptureProfile>,
}

fn default_duration() -> u64 { 10 }

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            preset: CapturePreset::default(),
            audio: false,
            orientation: 0,
            duration_secs: default_duration(),
            encoding: None,
        }
    }
}

impl RecordingConfig {
    /// Encoding parameters for this recording
    pub fn capture_profile(&self) -> CaptureProfile {
        self.encoding
            .clone()
            .unwrap_or_else(|| CaptureProfile::for_quality(self.quality))
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;
        toml::from_str(&content)
            .context("Failed to parse config TOML")
    }

    /// Load from an explicit path, else the user config file if present,
    /// else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// <config dir>/camcorder/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("camcorder").join(CONFIG_FILE))
    }

    /// Apply a named profile, merging settings
    ///
    /// Profile settings override base configuration values.
    pub fn apply_profile(mut self, profile_name: &str) -> Result<Self> {
        let profile = self.profiles.get(profile_name)
            .with_context(|| format!("Profile '{}' not found", profile_name))?
            .clone();

        let recording = &mut self.recording;
        if let Some(quality) = profile.quality {
            recording.quality = quality;
        }
        if let Some(preset) = profile.preset {
            recording.preset = preset;
        }
        if let Some(audio) = profile.audio {
            recording.audio = audio;
        }
        if let Some(orientation) = profile.orientation {
            recording.orientation = orientation;
        }
        if let Some(duration) = profile.duration_secs {
            recording.duration_secs = duration;
        }
        if profile.encoding.is_some() {
            recording.encoding = profile.encoding;
        }

        Ok(self)
    }

    /// Resolve output directory with fallback to default
    pub fn resolve_output_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.general.output_dir {
            dir.clone()
        } else {
            dirs::video_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Camcorder")
        }
    }

    pub fn resolve_ffmpeg(&self) -> PathBuf {
        self.general
            .ffmpeg
            .clone()
            .unwrap_or_else(|| PathBuf::from("ffmpeg"))
    }
}
