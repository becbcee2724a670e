//! Recording session driver
//!
//! Feeds a prepared ffmpeg recorder's surface with generated frames at the
//! capture rate until the requested duration elapses or a stop is signalled.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use camcorder_media::{CapturePreset, FfmpegRecorder, MediaRecorder, OutputFormat};

/// Frames between progress log lines
const PROGRESS_INTERVAL: u64 = 120;

/// File name for a new recording, e.g. `VID_20240131_093000_slowmo.mp4`
pub fn output_file_name(started: DateTime<Local>, preset: CapturePreset, format: OutputFormat) -> String {
    let stamp = started.format("%Y%m%d_%H%M%S");
    match preset {
        CapturePreset::Normal => format!("VID_{}.{}", stamp, format.extension()),
        _ => format!("VID_{}_{}.{}", stamp, preset, format.extension()),
    }
}

/// Time between surface writes for a capture rate
pub fn frame_interval(capture_rate: f64) -> Duration {
    if capture_rate.is_finite() && capture_rate > 0.0 {
        Duration::from_secs_f64(1.0 / capture_rate)
    } else {
        Duration::ZERO
    }
}

/// Moving color bars in RGBA
pub struct TestPattern {
    width: u32,
    height: u32,
    frame: u64,
}

impl TestPattern {
    const BARS: [[u8; 3]; 7] = [
        [192, 192, 192],
        [192, 192, 0],
        [0, 192, 192],
        [0, 192, 0],
        [192, 0, 192],
        [192, 0, 0],
        [0, 0, 192],
    ];

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, frame: 0 }
    }

    /// Render the next frame; bars scroll one column per frame
    pub fn next_frame(&mut self) -> Vec<u8> {
        let width = self.width as usize;
        let height = self.height as usize;
        let bar_width = (width / Self::BARS.len()).max(1);
        let offset = (self.frame % width.max(1) as u64) as usize;

        let mut row = Vec::with_capacity(width * 4);
        for x in 0..width {
            let bar = ((x + offset) % width) / bar_width;
            let [r, g, b] = Self::BARS[bar.min(Self::BARS.len() - 1)];
            row.extend_from_slice(&[r, g, b, 255]);
        }

        let mut data = Vec::with_capacity(row.len() * height);
        for _ in 0..height {
            data.extend_from_slice(&row);
        }

        self.frame += 1;
        data
    }
}

/// Drives a prepared recorder for a fixed duration
pub struct RecordSession {
    recorder: FfmpegRecorder,
    duration: Duration,
    pattern: TestPattern,
}

impl RecordSession {
    pub fn new(recorder: FfmpegRecorder, width: u32, height: u32, duration: Duration) -> Self {
        Self {
            recorder,
            duration,
            pattern: TestPattern::new(width, height),
        }
    }

    /// Record until the duration elapses or `running` is cleared.
    ///
    /// Returns the number of frames written.
    pub fn run(mut self, running: Arc<AtomicBool>) -> Result<u64> {
        let capture_rate = self.recorder.capture_rate().unwrap_or(30.0);
        let interval = frame_interval(capture_rate);

        info!(
            "recording {:?} at {} fps capture rate",
            self.duration, capture_rate
        );

        self.recorder.start().context("Failed to start ffmpeg")?;

        let started = Instant::now();
        let mut last_frame = Instant::now();
        let mut frames = 0u64;

        while running.load(Ordering::SeqCst) && started.elapsed() < self.duration {
            let elapsed = last_frame.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
            last_frame = Instant::now();

            let frame = self.pattern.next_frame();
            if let Err(e) = self.recorder.write_frame(&frame) {
                warn!("ffmpeg stopped accepting frames: {}", e);
                break;
            }

            frames += 1;
            if frames % PROGRESS_INTERVAL == 0 {
                debug!("wrote {} frames", frames);
            }
        }

        info!("finalizing recording...");
        self.recorder.stop().context("ffmpeg failed to finalize the recording")?;

        info!("recording stopped. total frames: {}", frames);
        Ok(frames)
    }
}
