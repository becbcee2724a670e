//! Recorder configuration plan
//!
//! Maps a [`RecorderSettings`] value to the exact sequence of configuration
//! calls a recorder expects. Do not reorder: recorders reject calls that
//! arrive out of sequence.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::preset::CapturePreset;
use crate::profile::{AudioCodec, CaptureProfile, OutputFormat, VideoCodec};
use crate::recorder::{AudioSource, MediaRecorder, VideoSource};

/// Everything needed to configure one recorder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecorderSettings {
    pub profile: CaptureProfile,
    pub output_path: PathBuf,
    pub preset: CapturePreset,
    pub audio_enabled: bool,
    /// Orientation hint in degrees, typically 0, 90, 180 or 270
    pub orientation: i32,
}

impl RecorderSettings {
    pub fn new(profile: CaptureProfile, output_path: impl Into<PathBuf>, preset: CapturePreset) -> Self {
        Self {
            profile,
            output_path: output_path.into(),
            preset,
            audio_enabled: false,
            orientation: 0,
        }
    }

    /// Capture rate derived from the profile frame rate and the preset
    pub fn capture_rate(&self) -> f64 {
        self.preset.capture_rate(self.profile.video_frame_rate)
    }
}

/// A single recorder configuration call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum RecorderOp {
    SetAudioSource(AudioSource),
    SetAudioEncodingBitRate(u32),
    SetVideoSource(VideoSource),
    SetOutputFormat(OutputFormat),
    SetAudioEncoder(AudioCodec),
    SetVideoEncoder(VideoCodec),
    SetVideoEncodingBitRate(u32),
    SetAudioSamplingRate(u32),
    SetVideoFrameRate(u32),
    SetCaptureRate(f64),
    SetVideoSize { width: u32, height: u32 },
    SetOutputFile(PathBuf),
    SetOrientationHint(i32),
}

impl RecorderOp {
    /// Issue this call on a recorder
    pub fn apply<R: MediaRecorder + ?Sized>(&self, recorder: &mut R) {
        debug!("applying {}", self);
        match self {
            RecorderOp::SetAudioSource(source) => recorder.set_audio_source(*source),
            RecorderOp::SetAudioEncodingBitRate(rate) => recorder.set_audio_encoding_bit_rate(*rate),
            RecorderOp::SetVideoSource(source) => recorder.set_video_source(*source),
            RecorderOp::SetOutputFormat(format) => recorder.set_output_format(*format),
            RecorderOp::SetAudioEncoder(codec) => recorder.set_audio_encoder(*codec),
            RecorderOp::SetVideoEncoder(codec) => recorder.set_video_encoder(*codec),
            RecorderOp::SetVideoEncodingBitRate(rate) => recorder.set_video_encoding_bit_rate(*rate),
            RecorderOp::SetAudioSamplingRate(rate) => recorder.set_audio_sampling_rate(*rate),
            RecorderOp::SetVideoFrameRate(rate) => recorder.set_video_frame_rate(*rate),
            RecorderOp::SetCaptureRate(fps) => recorder.set_capture_rate(*fps),
            RecorderOp::SetVideoSize { width, height } => recorder.set_video_size(*width, *height),
            RecorderOp::SetOutputFile(path) => recorder.set_output_file(path),
            RecorderOp::SetOrientationHint(degrees) => recorder.set_orientation_hint(*degrees),
        }
    }

    /// Whether this call belongs to the audio path
    pub fn is_audio(&self) -> bool {
        matches!(
            self,
            RecorderOp::SetAudioSource(_)
                | RecorderOp::SetAudioEncodingBitRate(_)
                | RecorderOp::SetAudioEncoder(_)
                | RecorderOp::SetAudioSamplingRate(_)
        )
    }
}

impl fmt::Display for RecorderOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecorderOp::SetAudioSource(source) => write!(f, "set_audio_source({})", source),
            RecorderOp::SetAudioEncodingBitRate(rate) => write!(f, "set_audio_encoding_bit_rate({})", rate),
            RecorderOp::SetVideoSource(source) => write!(f, "set_video_source({})", source),
            RecorderOp::SetOutputFormat(format) => write!(f, "set_output_format({:?})", format),
            RecorderOp::SetAudioEncoder(codec) => write!(f, "set_audio_encoder({:?})", codec),
            RecorderOp::SetVideoEncoder(codec) => write!(f, "set_video_encoder({:?})", codec),
            RecorderOp::SetVideoEncodingBitRate(rate) => write!(f, "set_video_encoding_bit_rate({})", rate),
            RecorderOp::SetAudioSamplingRate(rate) => write!(f, "set_audio_sampling_rate({})", rate),
            RecorderOp::SetVideoFrameRate(rate) => write!(f, "set_video_frame_rate({})", rate),
            RecorderOp::SetCaptureRate(fps) => write!(f, "set_capture_rate({})", fps),
            RecorderOp::SetVideoSize { width, height } => write!(f, "set_video_size({}, {})", width, height),
            RecorderOp::SetOutputFile(path) => write!(f, "set_output_file({})", path.display()),
            RecorderOp::SetOrientationHint(degrees) => write!(f, "set_orientation_hint({})", degrees),
        }
    }
}

/// Ordered configuration calls for the given settings.
///
/// The terminal `prepare` is not part of the plan.
pub fn plan(settings: &RecorderSettings) -> Vec<RecorderOp> {
    let profile = &settings.profile;
    let audio = settings.audio_enabled;
    let mut ops = Vec::with_capacity(13);

    if audio {
        ops.push(RecorderOp::SetAudioSource(AudioSource::Mic));
        ops.push(RecorderOp::SetAudioEncodingBitRate(profile.audio_bit_rate));
    }

    ops.push(RecorderOp::SetVideoSource(VideoSource::Surface));
    ops.push(RecorderOp::SetOutputFormat(profile.file_format));
    if audio {
        ops.push(RecorderOp::SetAudioEncoder(profile.audio_codec));
    }
    ops.push(RecorderOp::SetVideoEncoder(profile.video_codec));
    ops.push(RecorderOp::SetVideoEncodingBitRate(profile.video_bit_rate));
    if audio {
        ops.push(RecorderOp::SetAudioSamplingRate(profile.audio_sample_rate));
    }
    ops.push(RecorderOp::SetVideoFrameRate(profile.video_frame_rate));
    ops.push(RecorderOp::SetCaptureRate(settings.capture_rate()));
    ops.push(RecorderOp::SetVideoSize {
        width: profile.video_frame_width,
        height: profile.video_frame_height,
    });
    ops.push(RecorderOp::SetOutputFile(settings.output_path.clone()));
    ops.push(RecorderOp::SetOrientationHint(settings.orientation));

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Quality;

    fn settings(audio: bool, preset: CapturePreset) -> RecorderSettings {
        RecorderSettings {
            audio_enabled: audio,
            orientation: 90,
            ..RecorderSettings::new(CaptureProfile::for_quality(Quality::P1080), "/tmp/out.mp4", preset)
        }
    }

    fn position(ops: &[RecorderOp], pred: impl Fn(&RecorderOp) -> bool) -> usize {
        ops.iter().position(pred).expect("op missing from plan")
    }

    #[test]
    fn test_video_only_plan() {
        let ops = plan(&settings(false, CapturePreset::Normal));
        assert_eq!(
            ops,
            vec![
                RecorderOp::SetVideoSource(VideoSource::Surface),
                RecorderOp::SetOutputFormat(OutputFormat::Mpeg4),
                RecorderOp::SetVideoEncoder(VideoCodec::H264),
                RecorderOp::SetVideoEncodingBitRate(17_000_000),
                RecorderOp::SetVideoFrameRate(30),
                RecorderOp::SetCaptureRate(30.0),
                RecorderOp::SetVideoSize { width: 1920, height: 1080 },
                RecorderOp::SetOutputFile(PathBuf::from("/tmp/out.mp4")),
                RecorderOp::SetOrientationHint(90),
            ]
        );
        assert!(!ops.iter().any(RecorderOp::is_audio));
    }

    #[test]
    fn test_audio_calls_interleave_with_video() {
        let ops = plan(&settings(true, CapturePreset::Normal));
        assert_eq!(ops.len(), 13);
        assert_eq!(ops.iter().filter(|op| op.is_audio()).count(), 4);

        let audio_source = position(&ops, |op| matches!(op, RecorderOp::SetAudioSource(AudioSource::Mic)));
        let audio_bit_rate = position(&ops, |op| matches!(op, RecorderOp::SetAudioEncodingBitRate(96_000)));
        let video_source = position(&ops, |op| matches!(op, RecorderOp::SetVideoSource(_)));
        let output_format = position(&ops, |op| matches!(op, RecorderOp::SetOutputFormat(_)));
        let audio_encoder = position(&ops, |op| matches!(op, RecorderOp::SetAudioEncoder(AudioCodec::Aac)));
        let video_encoder = position(&ops, |op| matches!(op, RecorderOp::SetVideoEncoder(_)));
        let video_bit_rate = position(&ops, |op| matches!(op, RecorderOp::SetVideoEncodingBitRate(_)));
        let sampling_rate = position(&ops, |op| matches!(op, RecorderOp::SetAudioSamplingRate(48_000)));
        let frame_rate = position(&ops, |op| matches!(op, RecorderOp::SetVideoFrameRate(_)));

        assert!(audio_source < audio_bit_rate);
        assert!(audio_bit_rate < video_source);
        assert!(output_format < audio_encoder && audio_encoder < video_encoder);
        assert!(video_bit_rate < sampling_rate && sampling_rate < frame_rate);
    }

    #[test]
    fn test_capture_rate_follows_preset() {
        let ops = plan(&settings(false, CapturePreset::SlowMo));
        assert!(ops.contains(&RecorderOp::SetCaptureRate(60.0)));

        let ops = plan(&settings(false, CapturePreset::UltraTimeLapse));
        assert!(ops.contains(&RecorderOp::SetCaptureRate(5.0)));
    }

    #[test]
    fn test_orientation_is_last() {
        let ops = plan(&settings(true, CapturePreset::TimeLapse));
        assert_eq!(ops.last(), Some(&RecorderOp::SetOrientationHint(90)));
        assert_eq!(
            ops[ops.len() - 2],
            RecorderOp::SetOutputFile(PathBuf::from("/tmp/out.mp4"))
        );
    }

    #[test]
    fn test_op_display() {
        assert_eq!(
            RecorderOp::SetVideoSize { width: 640, height: 480 }.to_string(),
            "set_video_size(640, 480)"
        );
        assert_eq!(
            RecorderOp::SetAudioSource(AudioSource::Mic).to_string(),
            "set_audio_source(mic)"
        );
    }
}
