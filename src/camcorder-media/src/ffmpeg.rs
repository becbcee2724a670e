//! FFmpeg-backed recorder
//!
//! Video frames are piped as raw RGBA to FFmpeg stdin, which acts as the
//! recorder's input surface. Audio, when enabled, is read by FFmpeg from the
//! platform's default capture device.
//!
//! The recorder follows the usual recorder state machine:
//!
//! ```text
//! Initial -> SourceSet -> FormatSet -> Prepared -> Recording -> Stopped
//! ```
//!
//! A call made in the wrong state is remembered and reported by `prepare`.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use tracing::{debug, info, warn};

use crate::profile::{AudioCodec, OutputFormat, VideoCodec};
use crate::recorder::{AudioSource, MediaRecorder, RecorderFactory, VideoSource};

const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Bytes per pixel of frames written to the surface
const BYTES_PER_PIXEL: usize = 4;

/// Maximum stderr characters carried into an error
const STDERR_EXCERPT: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    SourceSet,
    FormatSet,
    Prepared,
    Recording,
    Stopped,
}

/// FFmpeg input arguments for the default audio capture device
pub fn default_audio_input() -> Vec<String> {
    let args: &[&str] = if cfg!(target_os = "macos") {
        &["-f", "avfoundation", "-i", ":0"]
    } else if cfg!(target_os = "windows") {
        &["-f", "dshow", "-i", "audio=default"]
    } else {
        &["-f", "pulse", "-i", "default"]
    };
    args.iter().map(|s| s.to_string()).collect()
}

/// Creates [`FfmpegRecorder`]s
#[derive(Debug, Clone)]
pub struct FfmpegRecorderFactory {
    /// FFmpeg executable
    pub program: PathBuf,
    /// Input arguments used when an audio source is set
    pub audio_input: Vec<String>,
}

impl Default for FfmpegRecorderFactory {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            audio_input: default_audio_input(),
        }
    }
}

impl RecorderFactory for FfmpegRecorderFactory {
    type Recorder = FfmpegRecorder;

    fn make_recorder(&self) -> FfmpegRecorder {
        FfmpegRecorder::new(self.program.clone(), self.audio_input.clone())
    }
}

/// Recorder that encodes through an FFmpeg child process
#[derive(Debug)]
pub struct FfmpegRecorder {
    program: PathBuf,
    audio_input: Vec<String>,
    state: State,
    /// First call made out of order, reported by `prepare`
    violation: Option<String>,

    audio_source: Option<AudioSource>,
    video_source: Option<VideoSource>,
    output_format: Option<OutputFormat>,
    audio_encoder: Option<AudioCodec>,
    video_encoder: Option<VideoCodec>,
    audio_bit_rate: Option<u32>,
    video_bit_rate: Option<u32>,
    audio_sample_rate: Option<u32>,
    frame_rate: Option<u32>,
    capture_rate: Option<f64>,
    video_size: Option<(u32, u32)>,
    output_file: Option<PathBuf>,
    orientation: i32,

    args: Vec<String>,
    process: Option<Child>,
    stdin: Option<ChildStdin>,
}

impl FfmpegRecorder {
    pub fn new(program: impl Into<PathBuf>, audio_input: Vec<String>) -> Self {
        Self {
            program: program.into(),
            audio_input,
            state: State::Initial,
            violation: None,
            audio_source: None,
            video_source: None,
            output_format: None,
            audio_encoder: None,
            video_encoder: None,
            audio_bit_rate: None,
            video_bit_rate: None,
            audio_sample_rate: None,
            frame_rate: None,
            capture_rate: None,
            video_size: None,
            output_file: None,
            orientation: 0,
            args: Vec::new(),
            process: None,
            stdin: None,
        }
    }

    /// FFmpeg arguments, available once prepared
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full command line, available once prepared
    pub fn command(&self) -> Option<Command> {
        if self.args.is_empty() {
            return None;
        }
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        Some(cmd)
    }

    /// Rate at which frames should be written to the surface
    pub fn capture_rate(&self) -> Option<f64> {
        self.capture_rate
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    /// Expected length of one RGBA frame in bytes
    pub fn frame_len(&self) -> usize {
        self.video_size
            .map(|(w, h)| w as usize * h as usize * BYTES_PER_PIXEL)
            .unwrap_or(0)
    }

    pub fn is_recording(&self) -> bool {
        self.state == State::Recording
    }

    /// Push one raw RGBA frame into the recording
    pub fn write_frame(&mut self, rgba: &[u8]) -> io::Result<()> {
        if rgba.len() != self.frame_len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("frame is {} bytes, expected {}", rgba.len(), self.frame_len()),
            ));
        }
        match self.stdin.as_mut() {
            Some(stdin) => stdin.write_all(rgba),
            None => Err(io::Error::other("write_frame called while not recording")),
        }
    }

    fn check_state(&mut self, call: &str, allowed: &[State]) -> bool {
        if allowed.contains(&self.state) {
            return true;
        }
        if self.violation.is_none() {
            self.violation = Some(format!("{} called in state {:?}", call, self.state));
        }
        false
    }

    fn configurable(&mut self, call: &str) -> bool {
        self.check_state(call, &[State::Initial, State::SourceSet, State::FormatSet])
    }

    fn after_format(&mut self, call: &str) -> bool {
        self.check_state(call, &[State::FormatSet])
    }

    /// Whether captured frames play back at a different rate than captured
    fn is_rate_shifted(&self) -> bool {
        match (self.capture_rate, self.frame_rate) {
            (Some(capture), Some(frame)) => (capture - f64::from(frame)).abs() > f64::EPSILON,
            _ => false,
        }
    }

    fn validate(&self) -> io::Result<()> {
        if let Some(violation) = &self.violation {
            return Err(io::Error::other(violation.clone()));
        }
        if self.state != State::FormatSet {
            return Err(io::Error::other(format!("prepare called in state {:?}", self.state)));
        }
        match self.video_source {
            Some(VideoSource::Surface) => {}
            Some(VideoSource::Camera) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "camera video source is not supported, use the surface",
                ))
            }
            None => return Err(invalid("no video source set")),
        }

        let format = self.output_format.ok_or_else(|| invalid("no output format set"))?;
        let video = self.video_encoder.ok_or_else(|| invalid("no video encoder set"))?;
        if self.output_file.is_none() {
            return Err(invalid("no output file set"));
        }
        if self.audio_source.is_some() && self.audio_encoder.is_none() {
            return Err(invalid("audio source set without an audio encoder"));
        }
        if self.audio_source.is_none() && self.audio_encoder.is_some() {
            return Err(invalid("audio encoder set without an audio source"));
        }

        match self.frame_rate {
            Some(rate) if rate > 0 => {}
            _ => return Err(invalid("video frame rate must be positive")),
        }
        match self.capture_rate {
            Some(rate) if rate.is_finite() && rate > 0.0 => {}
            None => {}
            Some(rate) => return Err(invalid(format!("invalid capture rate {}", rate))),
        }
        match self.video_size {
            Some((w, h)) if w > 0 && h > 0 && w % 2 == 0 && h % 2 == 0 => {}
            Some((w, h)) => return Err(invalid(format!("invalid video size {}x{}", w, h))),
            None => return Err(invalid("no video size set")),
        }
        if !matches!(self.orientation, 0 | 90 | 180 | 270) {
            return Err(invalid(format!("unsupported orientation hint {}", self.orientation)));
        }

        let webm = format == OutputFormat::Webm;
        if webm != (video == VideoCodec::Vp8) {
            return Err(invalid(format!("{:?} video cannot go in a {:?} container", video, format)));
        }
        if let Some(audio) = self.audio_encoder {
            if webm != (audio == AudioCodec::Opus) {
                return Err(invalid(format!("{:?} audio cannot go in a {:?} container", audio, format)));
            }
        }

        Ok(())
    }

    fn build_args(&self) -> Vec<String> {
        let mut args: Vec<String> = ["-hide_banner", "-loglevel", "error", "-nostats", "-y"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let (width, height) = self.video_size.unwrap_or_default();
        let frame_rate = self.frame_rate.unwrap_or_default();

        // Each surface frame becomes one output frame; the caller paces
        // writes at the capture rate.
        args.extend([
            "-f".to_string(),
            "rawvideo".to_string(),
            "-pix_fmt".to_string(),
            "rgba".to_string(),
            "-s".to_string(),
            format!("{}x{}", width, height),
            "-framerate".to_string(),
            frame_rate.to_string(),
        ]);
        // Written to the display matrix, needs FFmpeg 6.1 or later
        if self.orientation != 0 {
            args.extend([
                "-display_rotation".to_string(),
                display_rotation(self.orientation).to_string(),
            ]);
        }
        args.extend(["-i".to_string(), "-".to_string()]);

        let audio = match self.audio_encoder {
            Some(codec) if !self.is_rate_shifted() => Some(codec),
            Some(_) => {
                warn!("capture rate differs from frame rate, recording without audio");
                None
            }
            None => None,
        };
        if audio.is_some() {
            args.extend(self.audio_input.iter().cloned());
        }

        if let Some(codec) = self.video_encoder {
            args.extend(["-c:v".to_string(), video_codec_name(codec).to_string()]);
        }
        if let Some(rate) = self.video_bit_rate {
            args.extend(["-b:v".to_string(), rate.to_string()]);
        }
        args.extend(["-pix_fmt".to_string(), "yuv420p".to_string()]);
        args.extend(["-r".to_string(), frame_rate.to_string()]);

        if let Some(codec) = audio {
            args.extend(["-c:a".to_string(), audio_codec_name(codec).to_string()]);
            if let Some(rate) = self.audio_bit_rate {
                args.extend(["-b:a".to_string(), rate.to_string()]);
            }
            if let Some(rate) = self.audio_sample_rate {
                args.extend(["-ar".to_string(), rate.to_string()]);
            }
            if codec == AudioCodec::AmrNb {
                args.extend(["-ac".to_string(), "1".to_string()]);
            }
        }

        if let Some(format) = self.output_format {
            args.extend(["-f".to_string(), format.extension().to_string()]);
        }
        if let Some(path) = &self.output_file {
            args.push(path.to_string_lossy().into_owned());
        }

        args
    }
}

impl MediaRecorder for FfmpegRecorder {
    fn set_audio_source(&mut self, source: AudioSource) {
        if self.check_state("set_audio_source", &[State::Initial, State::SourceSet]) {
            self.audio_source = Some(source);
            self.state = State::SourceSet;
        }
    }

    fn set_audio_encoding_bit_rate(&mut self, bit_rate: u32) {
        if self.configurable("set_audio_encoding_bit_rate") {
            self.audio_bit_rate = Some(bit_rate);
        }
    }

    fn set_video_source(&mut self, source: VideoSource) {
        if self.check_state("set_video_source", &[State::Initial, State::SourceSet]) {
            self.video_source = Some(source);
            self.state = State::SourceSet;
        }
    }

    fn set_output_format(&mut self, format: OutputFormat) {
        if self.check_state("set_output_format", &[State::SourceSet]) {
            self.output_format = Some(format);
            self.state = State::FormatSet;
        }
    }

    fn set_audio_encoder(&mut self, codec: AudioCodec) {
        if self.after_format("set_audio_encoder") {
            self.audio_encoder = Some(codec);
        }
    }

    fn set_video_encoder(&mut self, codec: VideoCodec) {
        if self.after_format("set_video_encoder") {
            self.video_encoder = Some(codec);
        }
    }

    fn set_video_encoding_bit_rate(&mut self, bit_rate: u32) {
        if self.configurable("set_video_encoding_bit_rate") {
            self.video_bit_rate = Some(bit_rate);
        }
    }

    fn set_audio_sampling_rate(&mut self, sample_rate: u32) {
        if self.configurable("set_audio_sampling_rate") {
            self.audio_sample_rate = Some(sample_rate);
        }
    }

    fn set_video_frame_rate(&mut self, frame_rate: u32) {
        if self.after_format("set_video_frame_rate") {
            self.frame_rate = Some(frame_rate);
        }
    }

    fn set_capture_rate(&mut self, fps: f64) {
        if self.configurable("set_capture_rate") {
            self.capture_rate = Some(fps);
        }
    }

    fn set_video_size(&mut self, width: u32, height: u32) {
        if self.after_format("set_video_size") {
            self.video_size = Some((width, height));
        }
    }

    fn set_output_file(&mut self, path: &Path) {
        if self.after_format("set_output_file") {
            self.output_file = Some(path.to_path_buf());
        }
    }

    fn set_orientation_hint(&mut self, degrees: i32) {
        if self.configurable("set_orientation_hint") {
            self.orientation = degrees;
        }
    }

    fn prepare(&mut self) -> io::Result<()> {
        self.validate()?;

        if let Some(path) = &self.output_file {
            File::create(path)?;
        }

        self.args = self.build_args();
        self.state = State::Prepared;
        debug!("prepared ffmpeg recorder: {:?}", self.args);
        Ok(())
    }

    fn start(&mut self) -> io::Result<()> {
        if self.state != State::Prepared {
            return Err(io::Error::other(format!("start called in state {:?}", self.state)));
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        debug!("spawning ffmpeg: {:?}", cmd);

        let mut child = cmd.spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("failed to open ffmpeg stdin"))?;

        info!("recording to {:?}", self.output_file);
        self.process = Some(child);
        self.stdin = Some(stdin);
        self.state = State::Recording;
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        if self.state != State::Recording {
            return Err(io::Error::other(format!("stop called in state {:?}", self.state)));
        }
        self.state = State::Stopped;

        // Closing stdin signals EOF to ffmpeg
        self.stdin.take();

        if let Some(child) = self.process.take() {
            let output = child.wait_with_output()?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let excerpt: String = stderr.chars().take(STDERR_EXCERPT).collect();
                return Err(io::Error::other(format!(
                    "ffmpeg exited with {}: {}",
                    output.status,
                    excerpt.trim()
                )));
            }
        }

        info!("recording finalized: {:?}", self.output_file);
        Ok(())
    }
}

impl Drop for FfmpegRecorder {
    fn drop(&mut self) {
        if self.state == State::Recording {
            if let Err(e) = self.stop() {
                warn!("failed to finalize recording on drop: {}", e);
            }
        }
    }
}

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg.into())
}

fn video_codec_name(codec: VideoCodec) -> &'static str {
    match codec {
        VideoCodec::H263 => "h263",
        VideoCodec::H264 => "libx264",
        VideoCodec::Hevc => "libx265",
        VideoCodec::Vp8 => "libvpx",
    }
}

fn audio_codec_name(codec: AudioCodec) -> &'static str {
    match codec {
        AudioCodec::AmrNb => "libopencore_amrnb",
        AudioCodec::Aac => "aac",
        AudioCodec::Opus => "libopus",
    }
}

/// Orientation hints are clockwise, `-display_rotation` is counter-clockwise
fn display_rotation(orientation: i32) -> i32 {
    (360 - orientation.rem_euclid(360)) % 360
}

/// Check if FFmpeg is available
pub fn check_ffmpeg(program: &Path) -> bool {
    Command::new(program)
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check if FFmpeg was built with the named encoder
pub fn check_encoder(program: &Path, encoder: &str) -> bool {
    Command::new(program)
        .args(["-hide_banner", "-encoders"])
        .output()
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .split_whitespace()
                .any(|word| word == encoder)
        })
        .unwrap_or(false)
}

/// Encoders a profile would use, by FFmpeg name
pub fn required_encoders(video: VideoCodec, audio: Option<AudioCodec>) -> Vec<&'static str> {
    let mut encoders = vec![video_codec_name(video)];
    if let Some(audio) = audio {
        encoders.push(audio_codec_name(audio));
    }
    encoders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecorderBuilder;
    use crate::preset::CapturePreset;
    use crate::profile::{CaptureProfile, Quality};
    use crate::RecorderError;

    fn recorder() -> FfmpegRecorder {
        FfmpegRecorder::new("ffmpeg", vec!["-f".into(), "lavfi".into(), "-i".into(), "anullsrc".into()])
    }

    fn configure(rec: &mut FfmpegRecorder, output: &Path) {
        rec.set_video_source(VideoSource::Surface);
        rec.set_output_format(OutputFormat::Mpeg4);
        rec.set_video_encoder(VideoCodec::H264);
        rec.set_video_encoding_bit_rate(1_000_000);
        rec.set_video_frame_rate(30);
        rec.set_capture_rate(30.0);
        rec.set_video_size(640, 480);
        rec.set_output_file(output);
    }

    fn has_pair(args: &[String], flag: &str, value: &str) -> bool {
        args.windows(2).any(|w| w[0] == flag && w[1] == value)
    }

    #[test]
    fn test_prepare_builds_args_and_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("clip.mp4");
        let mut rec = recorder();
        configure(&mut rec, &output);
        rec.set_orientation_hint(90);

        rec.prepare().unwrap();

        assert!(output.exists());
        let args = rec.args();
        assert!(has_pair(args, "-s", "640x480"));
        assert!(has_pair(args, "-c:v", "libx264"));
        assert!(has_pair(args, "-b:v", "1000000"));
        assert!(has_pair(args, "-display_rotation", "270"));
        assert!(has_pair(args, "-f", "mp4"));
        assert!(!args.iter().any(|a| a == "-c:a"));
        assert_eq!(args.last().map(String::as_str), output.to_str());
        assert_eq!(rec.frame_len(), 640 * 480 * 4);
    }

    #[test]
    fn test_out_of_order_call_fails_prepare() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = recorder();
        rec.set_video_encoder(VideoCodec::H264);
        configure(&mut rec, &dir.path().join("clip.mp4"));

        let err = rec.prepare().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.to_string().contains("set_video_encoder"));
    }

    #[test]
    fn test_audio_source_after_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = recorder();
        configure(&mut rec, &dir.path().join("clip.mp4"));
        rec.set_audio_source(AudioSource::Mic);

        let err = rec.prepare().unwrap_err();
        assert!(err.to_string().contains("set_audio_source"));
    }

    #[test]
    fn test_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = recorder();
        configure(&mut rec, &dir.path().join("missing").join("clip.mp4"));

        assert_eq!(rec.prepare().unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_zero_frame_rate_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = recorder();
        configure(&mut rec, &dir.path().join("clip.mp4"));
        rec.set_video_frame_rate(0);
        rec.set_capture_rate(0.0);

        assert_eq!(rec.prepare().unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_odd_orientation_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = recorder();
        configure(&mut rec, &dir.path().join("clip.mp4"));
        rec.set_orientation_hint(45);

        assert_eq!(rec.prepare().unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_webm_requires_vp8() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = recorder();
        rec.set_video_source(VideoSource::Surface);
        rec.set_output_format(OutputFormat::Webm);
        rec.set_video_encoder(VideoCodec::H264);
        rec.set_video_frame_rate(30);
        rec.set_video_size(640, 480);
        rec.set_output_file(&dir.path().join("clip.webm"));

        let err = rec.prepare().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("Webm"));
    }

    #[test]
    fn test_start_before_prepare() {
        let mut rec = recorder();
        assert!(rec.start().is_err());
        assert!(rec.write_frame(&[]).is_err());
    }

    #[test]
    fn test_builder_with_audio() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("clip.mp4");
        let factory = FfmpegRecorderFactory {
            program: PathBuf::from("ffmpeg"),
            audio_input: vec!["-f".into(), "pulse".into(), "-i".into(), "default".into()],
        };
        let profile = CaptureProfile::for_quality(Quality::P720);

        let rec = RecorderBuilder::with_factory(profile, &output, CapturePreset::Normal, factory)
            .enable_audio(true)
            .build()
            .unwrap();

        let args = rec.args();
        assert!(has_pair(args, "-f", "pulse"));
        assert!(has_pair(args, "-c:a", "aac"));
        assert!(has_pair(args, "-b:a", "96000"));
        assert!(has_pair(args, "-ar", "48000"));
        assert_eq!(rec.capture_rate(), Some(30.0));
    }

    #[test]
    fn test_slow_motion_drops_audio() {
        let dir = tempfile::tempdir().unwrap();
        let profile = CaptureProfile::for_quality(Quality::P480);

        let rec = RecorderBuilder::new(profile, dir.path().join("slow.mp4"), "slowmo")
            .enable_audio(true)
            .build()
            .unwrap();

        assert_eq!(rec.capture_rate(), Some(60.0));
        assert!(has_pair(rec.args(), "-framerate", "30"));
        assert!(!rec.args().iter().any(|a| a == "-c:a"));
    }

    #[test]
    fn test_builder_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let profile = CaptureProfile::for_quality(Quality::Cif);

        let err = RecorderBuilder::new(profile, dir.path().join("nope").join("x.mp4"), "normal")
            .build()
            .unwrap_err();

        assert!(matches!(err, RecorderError::Prepare(_)));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_display_rotation_is_counter_clockwise() {
        assert_eq!(display_rotation(0), 0);
        assert_eq!(display_rotation(90), 270);
        assert_eq!(display_rotation(180), 180);
        assert_eq!(display_rotation(270), 90);
    }

    #[test]
    fn test_presets_change_pacing_not_playback_rate() {
        let dir = tempfile::tempdir().unwrap();
        let build = |preset: &str| {
            RecorderBuilder::new(
                CaptureProfile::for_quality(Quality::P480),
                dir.path().join(format!("{}.mp4", preset)),
                preset,
            )
            .build()
            .unwrap()
        };

        let normal = build("normal");
        let slow = build("slowmo");
        let lapse = build("ultratimelapse");

        assert_eq!(normal.capture_rate(), Some(30.0));
        assert_eq!(slow.capture_rate(), Some(60.0));
        assert_eq!(lapse.capture_rate(), Some(5.0));
        assert_ne!(slow.capture_rate(), normal.capture_rate());

        // Surface frames map one-to-one onto output frames at the profile
        // rate, so the write pacing alone stretches or compresses time
        for rec in [&normal, &slow, &lapse] {
            assert!(has_pair(rec.args(), "-framerate", "30"));
            assert!(has_pair(rec.args(), "-r", "30"));
            assert!(!rec.args().iter().any(|a| a == "-display_rotation"));
        }
    }

    #[test]
    fn test_required_encoders() {
        assert_eq!(required_encoders(VideoCodec::H264, None), vec!["libx264"]);
        assert_eq!(
            required_encoders(VideoCodec::H263, Some(AudioCodec::AmrNb)),
            vec!["h263", "libopencore_amrnb"]
        );
    }
}
