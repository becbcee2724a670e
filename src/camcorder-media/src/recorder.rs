//! Recorder traits
//!
//! Platform-agnostic seam between the builder and whatever actually records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

use crate::profile::{AudioCodec, OutputFormat, VideoCodec};

/// Where audio samples come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioSource {
    Default,
    Mic,
}

/// Where video frames come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    /// Frames are pushed by the caller through the recorder's input surface
    Surface,
    Camera,
}

impl fmt::Display for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioSource::Default => f.write_str("default"),
            AudioSource::Mic => f.write_str("mic"),
        }
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoSource::Surface => f.write_str("surface"),
            VideoSource::Camera => f.write_str("camera"),
        }
    }
}

/// A media recorder handle.
///
/// Recorders are order-sensitive: sources first, then the output format,
/// then encoders and stream parameters, then `prepare`. Setters never fail
/// directly; a recorder that receives a call out of order reports it from
/// `prepare`. Dropping the handle releases it.
pub trait MediaRecorder {
    fn set_audio_source(&mut self, source: AudioSource);
    fn set_audio_encoding_bit_rate(&mut self, bit_rate: u32);
    fn set_video_source(&mut self, source: VideoSource);
    fn set_output_format(&mut self, format: OutputFormat);
    fn set_audio_encoder(&mut self, codec: AudioCodec);
    fn set_video_encoder(&mut self, codec: VideoCodec);
    fn set_video_encoding_bit_rate(&mut self, bit_rate: u32);
    fn set_audio_sampling_rate(&mut self, sample_rate: u32);
    fn set_video_frame_rate(&mut self, frame_rate: u32);
    fn set_capture_rate(&mut self, fps: f64);
    fn set_video_size(&mut self, width: u32, height: u32);
    fn set_output_file(&mut self, path: &Path);
    fn set_orientation_hint(&mut self, degrees: i32);

    /// Validate and lock in the configuration
    fn prepare(&mut self) -> io::Result<()>;

    /// Begin recording. Only valid after a successful `prepare`.
    fn start(&mut self) -> io::Result<()>;

    /// Finish recording and finalize the output file
    fn stop(&mut self) -> io::Result<()>;
}

/// Produces fresh recorder handles
pub trait RecorderFactory {
    type Recorder: MediaRecorder;

    fn make_recorder(&self) -> Self::Recorder;
}

impl<F, R> RecorderFactory for F
where
    F: Fn() -> R,
    R: MediaRecorder,
{
    type Recorder = R;

    fn make_recorder(&self) -> R {
        self()
    }
}
