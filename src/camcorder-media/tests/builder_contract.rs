//! Call-order contract between the builder and its recorder

use std::io;
use std::path::PathBuf;

use camcorder_media::mock::MockCall;
use camcorder_media::{
    AudioCodec, AudioSource, CaptureProfile, CapturePreset, MockRecorderFactory, OutputFormat,
    RecorderBuilder, RecorderError, RecorderOp, VideoCodec, VideoSource,
};

fn profile() -> CaptureProfile {
    CaptureProfile {
        audio_bit_rate: 128_000,
        audio_sample_rate: 44_100,
        audio_codec: AudioCodec::Aac,
        video_codec: VideoCodec::H264,
        video_bit_rate: 4_000_000,
        video_frame_rate: 30,
        video_frame_width: 1280,
        video_frame_height: 720,
        file_format: OutputFormat::Mpeg4,
    }
}

fn capture_rate(preset: &str) -> f64 {
    let factory = MockRecorderFactory::new();
    let recorder = RecorderBuilder::with_factory(profile(), "clip.mp4", preset, factory)
        .build()
        .unwrap();
    recorder
        .ops()
        .into_iter()
        .find_map(|op| match op {
            RecorderOp::SetCaptureRate(rate) => Some(rate),
            _ => None,
        })
        .unwrap()
}

#[test]
fn test_known_presets_divide_frame_rate() {
    assert_eq!(capture_rate("ultraslowmo"), 120.0);
    assert_eq!(capture_rate("slowmo"), 60.0);
    assert_eq!(capture_rate("timelapse"), 10.0);
    assert_eq!(capture_rate("ultratimelapse"), 5.0);
}

#[test]
fn test_other_presets_keep_frame_rate() {
    for preset in ["", "normal", "cinematic", "SLOWMO"] {
        assert_eq!(capture_rate(preset), 30.0, "preset {:?}", preset);
    }
}

#[test]
fn test_full_call_sequence_with_audio() {
    let factory = MockRecorderFactory::new();
    let recorder = RecorderBuilder::with_factory(profile(), "/data/clip.mp4", CapturePreset::SlowMo, factory)
        .enable_audio(true)
        .orientation(270)
        .build()
        .unwrap();

    let expected: Vec<MockCall> = vec![
        RecorderOp::SetAudioSource(AudioSource::Mic),
        RecorderOp::SetAudioEncodingBitRate(128_000),
        RecorderOp::SetVideoSource(VideoSource::Surface),
        RecorderOp::SetOutputFormat(OutputFormat::Mpeg4),
        RecorderOp::SetAudioEncoder(AudioCodec::Aac),
        RecorderOp::SetVideoEncoder(VideoCodec::H264),
        RecorderOp::SetVideoEncodingBitRate(4_000_000),
        RecorderOp::SetAudioSamplingRate(44_100),
        RecorderOp::SetVideoFrameRate(30),
        RecorderOp::SetCaptureRate(60.0),
        RecorderOp::SetVideoSize { width: 1280, height: 720 },
        RecorderOp::SetOutputFile(PathBuf::from("/data/clip.mp4")),
        RecorderOp::SetOrientationHint(270),
    ]
    .into_iter()
    .map(MockCall::Configure)
    .chain(std::iter::once(MockCall::Prepare))
    .collect();

    assert_eq!(recorder.calls(), expected.as_slice());
}

#[test]
fn test_audio_disabled_issues_no_audio_calls() {
    let factory = MockRecorderFactory::new();
    let recorder = RecorderBuilder::with_factory(profile(), "clip.mp4", "normal", factory)
        .build()
        .unwrap();

    assert!(recorder.is_prepared());
    assert_eq!(recorder.ops().len(), 9);
    assert!(!recorder.ops().iter().any(RecorderOp::is_audio));
}

#[test]
fn test_one_recorder_per_build() {
    let factory = MockRecorderFactory::new();
    let builder = RecorderBuilder::with_factory(profile(), "clip.mp4", "normal", factory.clone());

    let first = builder.build().unwrap();
    assert_eq!(factory.created(), 1);
    assert_eq!(first.serial(), 1);

    let second = builder.build().unwrap();
    assert_eq!(factory.created(), 2);
    assert_eq!(second.serial(), 2);
}

#[test]
fn test_orientation_last_value_applied_once_before_prepare() {
    let factory = MockRecorderFactory::new();
    let recorder = RecorderBuilder::with_factory(profile(), "clip.mp4", "normal", factory)
        .orientation(90)
        .orientation(180)
        .build()
        .unwrap();

    let calls = recorder.calls();
    let hints: Vec<_> = calls
        .iter()
        .filter(|c| matches!(c, MockCall::Configure(RecorderOp::SetOrientationHint(_))))
        .collect();
    assert_eq!(hints.len(), 1);
    assert_eq!(
        &calls[calls.len() - 2..],
        &[
            MockCall::Configure(RecorderOp::SetOrientationHint(180)),
            MockCall::Prepare
        ]
    );
}

#[test]
fn test_prepare_failure_propagates_io_kind() {
    let factory = MockRecorderFactory::failing(io::ErrorKind::PermissionDenied);
    let result = RecorderBuilder::with_factory(profile(), "/readonly/clip.mp4", "normal", factory.clone())
        .enable_audio(true)
        .build();

    match result {
        Err(RecorderError::Prepare(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        other => panic!("expected prepare failure, got {:?}", other.map(|r| r.serial())),
    }

    // The whole plan was applied before prepare rejected it
    let journal = factory.journal();
    assert_eq!(journal.len(), 14);
    assert_eq!(journal.last(), Some(&(1, MockCall::Prepare)));
}
