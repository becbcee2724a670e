//! Recorder builder
//!
//! Collects the recording settings, then configures and prepares a fresh
//! recorder from a factory in a single `build()` call.

use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::RecorderError;
use crate::ffmpeg::FfmpegRecorderFactory;
use crate::plan::{plan, RecorderOp, RecorderSettings};
use crate::preset::CapturePreset;
use crate::profile::CaptureProfile;
use crate::recorder::{MediaRecorder, RecorderFactory};

/// Builds prepared recorders.
///
/// ```no_run
/// use camcorder_media::{CaptureProfile, Quality, RecorderBuilder};
///
/// let profile = CaptureProfile::for_quality(Quality::P720);
/// let recorder = RecorderBuilder::new(profile, "clip.mp4", "slowmo")
///     .enable_audio(true)
///     .orientation(90)
///     .build()?;
/// # Ok::<(), camcorder_media::RecorderError>(())
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct RecorderBuilder<F = FfmpegRecorderFactory> {
    settings: RecorderSettings,
    factory: F,
}

impl RecorderBuilder<FfmpegRecorderFactory> {
    /// Create a builder backed by ffmpeg recorders
    pub fn new(
        profile: CaptureProfile,
        output_path: impl Into<PathBuf>,
        preset: impl Into<CapturePreset>,
    ) -> Self {
        Self::with_factory(profile, output_path, preset, FfmpegRecorderFactory::default())
    }
}

impl<F: RecorderFactory> RecorderBuilder<F> {
    /// Create a builder that obtains recorders from `factory`
    pub fn with_factory(
        profile: CaptureProfile,
        output_path: impl Into<PathBuf>,
        preset: impl Into<CapturePreset>,
        factory: F,
    ) -> Self {
        Self::from_settings(RecorderSettings::new(profile, output_path, preset.into()), factory)
    }

    pub fn from_settings(settings: RecorderSettings, factory: F) -> Self {
        Self { settings, factory }
    }

    /// Record audio from the microphone alongside video
    pub fn enable_audio(mut self, enabled: bool) -> Self {
        self.settings.audio_enabled = enabled;
        self
    }

    /// Orientation hint in degrees stored with the output
    pub fn orientation(mut self, degrees: i32) -> Self {
        self.settings.orientation = degrees;
        self
    }

    pub fn settings(&self) -> &RecorderSettings {
        &self.settings
    }

    /// The configuration calls `build()` will issue, in order
    pub fn plan(&self) -> Vec<RecorderOp> {
        plan(&self.settings)
    }

    /// Configure a fresh recorder and prepare it.
    ///
    /// Obtains exactly one recorder from the factory. On success the
    /// prepared recorder is handed to the caller, who starts, stops and
    /// drops it. A `prepare` failure is returned as [`RecorderError::Prepare`]
    /// and the half-configured recorder is dropped.
    pub fn build(&self) -> Result<F::Recorder, RecorderError> {
        let mut recorder = self.factory.make_recorder();

        let ops = self.plan();
        debug!(
            "configuring recorder: {} calls, preset {}, audio {}",
            ops.len(),
            self.settings.preset,
            self.settings.audio_enabled
        );
        for op in &ops {
            op.apply(&mut recorder);
        }

        if let Err(e) = recorder.prepare() {
            warn!("recorder rejected configuration for {:?}: {}", self.settings.output_path, e);
            return Err(RecorderError::Prepare(e));
        }

        info!(
            "recorder prepared: {:?} ({}x{} @ {} fps, capture {} fps)",
            self.settings.output_path,
            self.settings.profile.video_frame_width,
            self.settings.profile.video_frame_height,
            self.settings.profile.video_frame_rate,
            self.settings.capture_rate()
        );

        Ok(recorder)
    }
}
