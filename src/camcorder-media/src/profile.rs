//! Capture profiles
//!
//! A profile is the full set of encoding parameters for one recording:
//! bit rates, codecs, frame size and rate, and the container format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecorderError;

/// Container format of the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[serde(rename = "3gp")]
    ThreeGpp,
    Mpeg4,
    Webm,
}

impl OutputFormat {
    /// File extension, also the FFmpeg muxer name
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::ThreeGpp => "3gp",
            OutputFormat::Mpeg4 => "mp4",
            OutputFormat::Webm => "webm",
        }
    }
}

/// Audio encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCodec {
    AmrNb,
    Aac,
    Opus,
}

/// Video encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoCodec {
    H263,
    H264,
    Hevc,
    Vp8,
}

/// Encoding parameters for a recording session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureProfile {
    /// Audio bit rate in bits per second
    pub audio_bit_rate: u32,
    /// Audio sample rate in Hz
    pub audio_sample_rate: u32,
    pub audio_codec: AudioCodec,
    pub video_codec: VideoCodec,
    /// Video bit rate in bits per second
    pub video_bit_rate: u32,
    /// Playback frame rate in frames per second
    pub video_frame_rate: u32,
    pub video_frame_width: u32,
    pub video_frame_height: u32,
    pub file_format: OutputFormat,
}

/// Stock quality levels, each backed by a fixed profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "cif")]
    Cif,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    #[default]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "2160p")]
    P2160,
}

impl Quality {
    pub fn all() -> &'static [Quality] {
        &[
            Quality::Low,
            Quality::Cif,
            Quality::P480,
            Quality::P720,
            Quality::P1080,
            Quality::P2160,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Cif => "cif",
            Quality::P480 => "480p",
            Quality::P720 => "720p",
            Quality::P1080 => "1080p",
            Quality::P2160 => "2160p",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = RecorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::all()
            .iter()
            .copied()
            .find(|q| q.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecorderError::UnknownQuality(s.to_string()))
    }
}

impl CaptureProfile {
    /// Stock profile for a quality level
    pub fn for_quality(quality: Quality) -> Self {
        match quality {
            Quality::Low => Self {
                audio_bit_rate: 12_200,
                audio_sample_rate: 8_000,
                audio_codec: AudioCodec::AmrNb,
                video_codec: VideoCodec::H263,
                video_bit_rate: 192_000,
                video_frame_rate: 15,
                video_frame_width: 176,
                video_frame_height: 144,
                file_format: OutputFormat::ThreeGpp,
            },
            Quality::Cif => Self::mpeg4(352, 288, 1_500_000),
            Quality::P480 => Self::mpeg4(720, 480, 2_500_000),
            Quality::P720 => Self::mpeg4(1280, 720, 5_000_000),
            Quality::P1080 => Self::mpeg4(1920, 1080, 17_000_000),
            Quality::P2160 => Self {
                video_codec: VideoCodec::Hevc,
                ..Self::mpeg4(3840, 2160, 42_000_000)
            },
        }
    }

    fn mpeg4(width: u32, height: u32, video_bit_rate: u32) -> Self {
        Self {
            audio_bit_rate: 96_000,
            audio_sample_rate: 48_000,
            audio_codec: AudioCodec::Aac,
            video_codec: VideoCodec::H264,
            video_bit_rate,
            video_frame_rate: 30,
            video_frame_width: width,
            video_frame_height: height,
            file_format: OutputFormat::Mpeg4,
        }
    }
}

impl Default for CaptureProfile {
    fn default() -> Self {
        Self::for_quality(Quality::default())
    }
}
