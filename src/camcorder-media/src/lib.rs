//! camcorder-media - Recorder configuration for Camcorder
//!
//! Turns a capture profile, output path and capture preset into a prepared
//! recorder. Configuration calls are issued in the fixed order recorders
//! expect, then `prepare` locks the configuration in.

pub mod builder;
pub mod error;
pub mod ffmpeg;
pub mod mock;
pub mod plan;
pub mod preset;
pub mod profile;
pub mod recorder;

pub use builder::RecorderBuilder;
pub use error::RecorderError;
pub use ffmpeg::{FfmpegRecorder, FfmpegRecorderFactory};
pub use mock::{MockRecorder, MockRecorderFactory};
pub use plan::{plan, RecorderOp, RecorderSettings};
pub use preset::CapturePreset;
pub use profile::{AudioCodec, CaptureProfile, OutputFormat, Quality, VideoCodec};
pub use recorder::{AudioSource, MediaRecorder, RecorderFactory, VideoSource};
